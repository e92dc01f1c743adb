use crate::resolver::SearchEngine;

/// Auto-detection mode for links, phone numbers and email addresses in page
/// content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectorTypes {
    #[default]
    All,
    PhoneNumber,
    Link,
    Email,
    None,
}

/// User-configurable session defaults. Never mutated by incognito toggling;
/// the incognito override lives in [`effective_policy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPolicy {
    pub detector_types: DetectorTypes,
    pub allow_storage: bool,
    pub allow_javascript: bool,
    pub allow_cookies: bool,
    pub allow_location: bool,
    pub allow_caching: bool,
    pub default_search_engine: SearchEngine,
}

impl Default for ContentPolicy {
    fn default() -> Self {
        Self {
            detector_types: DetectorTypes::All,
            allow_storage: true,
            allow_javascript: true,
            allow_cookies: true,
            allow_location: true,
            allow_caching: true,
            default_search_engine: SearchEngine::Google,
        }
    }
}

/// The flags actually applied to a page load, after the incognito override.
/// Computed, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectivePolicy {
    pub detector_types: DetectorTypes,
    pub allow_storage: bool,
    pub allow_javascript: bool,
    pub allow_cookies: bool,
    pub allow_location: bool,
    pub allow_caching: bool,
}

/// Derives the effective content policy for a page load.
///
/// Incognito forces storage, cookies, geolocation and caching off. JavaScript
/// execution and detector types are deliberately not restricted.
pub fn effective_policy(base: &ContentPolicy, incognito: bool) -> EffectivePolicy {
    EffectivePolicy {
        detector_types: base.detector_types,
        allow_javascript: base.allow_javascript,
        allow_storage: base.allow_storage && !incognito,
        allow_cookies: base.allow_cookies && !incognito,
        allow_location: base.allow_location && !incognito,
        allow_caching: base.allow_caching && !incognito,
    }
}
