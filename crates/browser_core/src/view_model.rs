#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrowserViewModel {
    /// Text shown in the address field: raw input while editing, decorated
    /// display text after a commit or an incognito toggle.
    pub address_text: String,
    pub page_title: String,
    pub back_enabled: bool,
    pub forward_enabled: bool,
    pub incognito: bool,
}
