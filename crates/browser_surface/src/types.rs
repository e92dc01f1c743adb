/// Auto-detection mode applied to rendered page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectorMode {
    #[default]
    All,
    PhoneNumber,
    Link,
    Email,
    None,
}

/// Flags applied to a page load. The host derives these from its effective
/// content policy; the surface applies them verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub javascript_enabled: bool,
    pub storage_enabled: bool,
    pub cookies_enabled: bool,
    pub geolocation_enabled: bool,
    pub cache_enabled: bool,
    pub detector_mode: DetectorMode,
    /// Script injected into every page after load.
    pub injected_script: Option<String>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            javascript_enabled: true,
            storage_enabled: true,
            cookies_enabled: true,
            geolocation_enabled: true,
            cache_enabled: true,
            detector_mode: DetectorMode::All,
            injected_script: None,
        }
    }
}

/// A request the surface is about to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceRequest {
    pub url: String,
}

/// Events a web surface reports back to the host. Delivery order is not
/// guaranteed relative to host commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// A page finished loading.
    LoadFinished {
        can_go_back: bool,
        can_go_forward: bool,
        title: String,
    },
    /// The history position or title changed without a full load.
    NavigationChanged {
        can_go_back: bool,
        can_go_forward: bool,
        title: String,
    },
    /// The current load failed.
    LoadFailed { details: String },
    /// The page posted a message to the host.
    MessageReceived { data: String },
}
