use browser_core::{DetectorTypes, Effect, EffectivePolicy, Msg};
use browser_logging::{browser_debug, browser_info, browser_warn};
use browser_surface::{DetectorMode, RenderSettings, SurfaceEvent, SurfaceHandle};

/// Script injected into every rendered page. The surface expects the script
/// to evaluate to a value; `true;` is the neutral stub.
const INJECTED_SCRIPT: &str = "true;";

pub struct EffectRunner {
    surface: SurfaceHandle,
}

impl EffectRunner {
    /// Takes ownership of the one surface handle for the life of the shell.
    pub fn new(surface: SurfaceHandle) -> Self {
        Self { surface }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Render { url, policy } => {
                    browser_info!("render url={url}");
                    self.surface.render(url, map_policy(&policy));
                }
                Effect::GoBack => self.surface.go_back(),
                Effect::GoForward => self.surface.go_forward(),
                Effect::Reload { policy } => {
                    browser_debug!("reload with refreshed policy");
                    self.surface.reload(Some(map_policy(&policy)));
                }
            }
        }
    }

    /// Drains pending surface events into core messages.
    pub fn poll_events(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.surface.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

fn map_policy(policy: &EffectivePolicy) -> RenderSettings {
    RenderSettings {
        javascript_enabled: policy.allow_javascript,
        storage_enabled: policy.allow_storage,
        cookies_enabled: policy.allow_cookies,
        geolocation_enabled: policy.allow_location,
        cache_enabled: policy.allow_caching,
        detector_mode: map_detector(policy.detector_types),
        injected_script: Some(INJECTED_SCRIPT.to_owned()),
    }
}

fn map_detector(types: DetectorTypes) -> DetectorMode {
    match types {
        DetectorTypes::All => DetectorMode::All,
        DetectorTypes::PhoneNumber => DetectorMode::PhoneNumber,
        DetectorTypes::Link => DetectorMode::Link,
        DetectorTypes::Email => DetectorMode::Email,
        DetectorTypes::None => DetectorMode::None,
    }
}

fn map_event(event: SurfaceEvent) -> Msg {
    match event {
        SurfaceEvent::LoadFinished {
            can_go_back,
            can_go_forward,
            title,
        }
        | SurfaceEvent::NavigationChanged {
            can_go_back,
            can_go_forward,
            title,
        } => Msg::NavigationChanged {
            can_go_back,
            can_go_forward,
            title,
        },
        SurfaceEvent::LoadFailed { details } => {
            browser_warn!("surface load failed: {details}");
            Msg::LoadFailed { details }
        }
        SurfaceEvent::MessageReceived { data } => {
            browser_info!("surface message: {data}");
            Msg::SurfaceMessage { data }
        }
    }
}
