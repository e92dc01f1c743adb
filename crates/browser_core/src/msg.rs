#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the address field; raw text, shown verbatim.
    InputChanged(String),
    /// User submitted the current address input for navigation.
    AddressSubmitted,
    /// User toggled the incognito switch.
    IncognitoToggled,
    /// User pressed the back button.
    BackRequested,
    /// User pressed the forward button.
    ForwardRequested,
    /// User pressed the reload button.
    ReloadRequested,
    /// The web surface reported a load or an in-page navigation.
    NavigationChanged {
        can_go_back: bool,
        can_go_forward: bool,
        title: String,
    },
    /// The web surface failed to load the current page.
    LoadFailed { details: String },
    /// The page posted a message to the host.
    SurfaceMessage { data: String },
    /// Fallback for placeholder wiring.
    NoOp,
}
