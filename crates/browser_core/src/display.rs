//! Address-bar display decoration.
//!
//! The committed display string is derived from the current URL: one prefix
//! rule is stripped (first match wins, deliberately not iterated — the rules
//! overlap and applying more than one would change observable output), the
//! path is cut off, and security/privacy badges are prepended.

pub(crate) const PLACEHOLDER: &str = "Enter Address";
pub(crate) const PRIVATE_PLACEHOLDER: &str = "Private - Enter Address";

const SECURE_BADGE: &str = "\u{1F512} ";
const INSECURE_BADGE: &str = "Not secure - ";
const PRIVATE_BADGE: &str = "Private - ";

/// Ordered display-prefix rules. Only the first matching rule is applied.
const STRIP_RULES: [&str; 5] = ["https://www.", "http://www.", "http://", "https://", "www."];

/// Human-readable rendering of a committed URL.
pub(crate) fn prettify(url: &str, incognito: bool) -> String {
    let stripped = strip_display_prefix(url);
    let host = stripped.split('/').next().unwrap_or(stripped);

    let mut display = host.to_owned();
    if url.starts_with("https:") {
        display = format!("{SECURE_BADGE}{display}");
    } else if url.starts_with("http:") {
        display = format!("{INSECURE_BADGE}{display}");
    }
    if incognito {
        display = format!("{PRIVATE_BADGE}{display}");
    }
    display
}

/// Display text shown when no page has been committed in the current mode.
pub(crate) fn placeholder(incognito: bool) -> &'static str {
    if incognito {
        PRIVATE_PLACEHOLDER
    } else {
        PLACEHOLDER
    }
}

fn strip_display_prefix(url: &str) -> &str {
    for rule in STRIP_RULES {
        if let Some(rest) = url.strip_prefix(rule) {
            return rest;
        }
    }
    url
}

#[cfg(test)]
mod tests {
    use super::{placeholder, prettify, strip_display_prefix};

    #[test]
    fn first_matching_rule_wins() {
        assert_eq!(strip_display_prefix("http://www.example.com"), "example.com");
        assert_eq!(strip_display_prefix("https://example.com"), "example.com");
        assert_eq!(strip_display_prefix("www.example.com"), "example.com");
    }

    #[test]
    fn only_one_rule_is_applied() {
        // After `https://www.` strips, the remaining `www.` must survive.
        assert_eq!(strip_display_prefix("https://www.www.example.com"), "www.example.com");
    }

    #[test]
    fn unmatched_input_passes_through() {
        assert_eq!(strip_display_prefix("example.com"), "example.com");
    }

    #[test]
    fn path_is_cut_from_the_display() {
        assert_eq!(prettify("https://example.com/a/b?q=1", false), "\u{1F512} example.com");
    }

    #[test]
    fn insecure_url_is_labelled() {
        assert_eq!(prettify("http://example.com", false), "Not secure - example.com");
    }

    #[test]
    fn incognito_badge_wraps_the_security_badge() {
        assert_eq!(
            prettify("https://example.com", true),
            "Private - \u{1F512} example.com"
        );
        assert_eq!(
            prettify("http://example.com", true),
            "Private - Not secure - example.com"
        );
    }

    #[test]
    fn placeholder_reflects_privacy_mode() {
        assert_eq!(placeholder(false), "Enter Address");
        assert_eq!(placeholder(true), "Private - Enter Address");
    }
}
