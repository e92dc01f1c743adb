use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use thiserror::Error;

/// Characters escaped when raw input is embedded into a search template.
/// Alphanumerics and `; , / ? : @ & = + $ - _ . ! ~ * ' ( ) #` pass through
/// untouched, matching the escaping the templates were written against.
const QUERY_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\');

/// Search engines the address bar can dispatch a query to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchEngine {
    #[default]
    Google,
    DuckDuckGo,
    Bing,
}

impl SearchEngine {
    /// Result-page URL for an already percent-encoded query.
    pub fn search_url(self, encoded_query: &str) -> String {
        match self {
            Self::Google => format!("https://www.google.com/search?q={encoded_query}"),
            Self::DuckDuckGo => format!("https://duckduckgo.com/?q={encoded_query}"),
            Self::Bing => format!("https://www.bing.com/search?q={encoded_query}"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The address bar handed over nothing to navigate to.
    #[error("cannot resolve an empty address input")]
    EmptyInput,
}

/// Turns raw address-bar text into a navigable URL.
///
/// Input is treated as a URL when it is a single whitespace-delimited token
/// containing a `.`; anything else becomes a search on `engine`. A URL-like
/// token keeps its scheme when it already starts with `http` or `https`
/// (prefix match only, no URL grammar) and gets `https://` prepended
/// otherwise.
pub fn resolve(raw_input: &str, engine: SearchEngine) -> Result<String, ResolveError> {
    let mut tokens = raw_input.split_whitespace();
    let Some(first) = tokens.next() else {
        return Err(ResolveError::EmptyInput);
    };

    if tokens.next().is_none() && first.contains('.') {
        if first.starts_with("https") || first.starts_with("http") {
            return Ok(first.to_owned());
        }
        return Ok(format!("https://{first}"));
    }

    let encoded = utf8_percent_encode(raw_input, QUERY_ESCAPE).to_string();
    Ok(engine.search_url(&encoded))
}
