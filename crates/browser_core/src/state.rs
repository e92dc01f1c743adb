use crate::display;
use crate::policy::{effective_policy, ContentPolicy, EffectivePolicy};
use crate::view_model::BrowserViewModel;

/// First page loaded when the screen is instantiated.
pub const INITIAL_URL: &str = "https://www.google.com";

/// The single mutable session record. Created once per screen, mutated only
/// through [`update`](crate::update), discarded on teardown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    current_url: String,
    input_text: String,
    display_text: String,
    page_title: String,
    can_go_back: bool,
    can_go_forward: bool,
    incognito: bool,
    base_config: ContentPolicy,
    dirty: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::with_config(ContentPolicy::default())
    }

    pub fn with_config(base_config: ContentPolicy) -> Self {
        Self {
            current_url: INITIAL_URL.to_owned(),
            input_text: INITIAL_URL.to_owned(),
            display_text: display::prettify(INITIAL_URL, false),
            page_title: String::new(),
            can_go_back: false,
            can_go_forward: false,
            incognito: false,
            base_config,
            dirty: false,
        }
    }

    pub fn view(&self) -> BrowserViewModel {
        BrowserViewModel {
            address_text: self.display_text.clone(),
            page_title: self.page_title.clone(),
            back_enabled: self.can_go_back,
            forward_enabled: self.can_go_forward,
            incognito: self.incognito,
        }
    }

    /// Last resolved, navigable URL; always scheme-qualified.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Raw text backing the address field while editing.
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn base_config(&self) -> &ContentPolicy {
        &self.base_config
    }

    pub fn incognito(&self) -> bool {
        self.incognito
    }

    pub fn can_go_back(&self) -> bool {
        self.can_go_back
    }

    pub fn can_go_forward(&self) -> bool {
        self.can_go_forward
    }

    /// Content policy for the next page load, after the incognito override.
    pub fn effective_policy(&self) -> EffectivePolicy {
        effective_policy(&self.base_config, self.incognito)
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input_text(&mut self, text: String) {
        // Editing mode: the field shows exactly what the user typed, with no
        // lock or privacy decoration.
        self.display_text = text.clone();
        self.input_text = text;
        self.mark_dirty();
    }

    pub(crate) fn commit_navigation(&mut self, url: String) {
        self.display_text = display::prettify(&url, self.incognito);
        // The pending edit is cleared; the field reverts to the display text.
        self.input_text = url.clone();
        self.current_url = url;
        self.mark_dirty();
    }

    pub(crate) fn toggle_incognito(&mut self) {
        self.incognito = !self.incognito;
        self.display_text = display::placeholder(self.incognito).to_owned();
        self.mark_dirty();
    }

    pub(crate) fn apply_navigation(&mut self, can_go_back: bool, can_go_forward: bool, title: String) {
        // Verbatim overwrite; events are not sequenced, last write wins.
        self.can_go_back = can_go_back;
        self.can_go_forward = can_go_forward;
        self.page_title = title;
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
