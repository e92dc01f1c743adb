use url::Url;

use browser_logging::{browser_debug, browser_trace};

use crate::filter::{PassThroughFilter, RequestFilter};
use crate::types::{RenderSettings, SurfaceEvent, SurfaceRequest};

/// Receives the events a surface emits while executing a command.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: SurfaceEvent);
}

/// Forwards surface events into an mpsc channel. Send failures are ignored;
/// a torn-down receiver just means nobody is listening any more.
pub struct ChannelEventSink {
    tx: std::sync::mpsc::Sender<SurfaceEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: std::sync::mpsc::Sender<SurfaceEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: SurfaceEvent) {
        let _ = self.tx.send(event);
    }
}

/// An embedded content renderer driven by the host.
///
/// The host supplies URLs and [`RenderSettings`]; the surface reports back
/// through the sink passed to each call. Back and forward are no-ops at the
/// ends of the history; reload is always permitted.
pub trait WebSurface: Send {
    /// Loads `url` under the given settings.
    fn render(&mut self, url: &str, settings: &RenderSettings, sink: &dyn EventSink);
    /// Steps back one history entry.
    fn go_back(&mut self, sink: &dyn EventSink);
    /// Steps forward one history entry.
    fn go_forward(&mut self, sink: &dyn EventSink);
    /// Reloads the current page, re-applying `settings` first when given.
    fn reload(&mut self, settings: Option<&RenderSettings>, sink: &dyn EventSink);
}

/// Reference surface with a simulated linear page history.
///
/// Page titles are derived from the URL host. Every load is answered by the
/// configured [`RequestFilter`] before it touches the history.
pub struct HeadlessSurface {
    history: Vec<String>,
    position: usize,
    settings: RenderSettings,
    filter: Box<dyn RequestFilter>,
}

impl HeadlessSurface {
    pub fn new(filter: Box<dyn RequestFilter>) -> Self {
        Self {
            history: Vec::new(),
            position: 0,
            settings: RenderSettings::default(),
            filter,
        }
    }

    /// URL of the page currently shown, if anything has loaded yet.
    pub fn current_url(&self) -> Option<&str> {
        self.history.get(self.position).map(String::as_str)
    }

    /// Settings applied to the most recent load or reload.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    fn can_go_back(&self) -> bool {
        self.position > 0
    }

    fn can_go_forward(&self) -> bool {
        self.position + 1 < self.history.len()
    }

    fn apply_settings(&mut self, settings: &RenderSettings) {
        self.settings = settings.clone();
        if self.settings.javascript_enabled {
            if let Some(script) = &self.settings.injected_script {
                browser_trace!("injecting page script ({} bytes)", script.len());
            }
        }
    }

    fn emit_load_finished(&self, sink: &dyn EventSink) {
        let Some(url) = self.current_url() else {
            return;
        };
        sink.emit(SurfaceEvent::LoadFinished {
            can_go_back: self.can_go_back(),
            can_go_forward: self.can_go_forward(),
            title: page_title(url),
        });
    }

    fn emit_navigation_changed(&self, sink: &dyn EventSink) {
        let Some(url) = self.current_url() else {
            return;
        };
        sink.emit(SurfaceEvent::NavigationChanged {
            can_go_back: self.can_go_back(),
            can_go_forward: self.can_go_forward(),
            title: page_title(url),
        });
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new(Box::new(PassThroughFilter))
    }
}

impl WebSurface for HeadlessSurface {
    fn render(&mut self, url: &str, settings: &RenderSettings, sink: &dyn EventSink) {
        let request = SurfaceRequest {
            url: url.to_owned(),
        };
        if !self.filter.should_allow(&request) {
            browser_debug!("request blocked by filter: {url}");
            sink.emit(SurfaceEvent::LoadFailed {
                details: format!("request blocked: {url}"),
            });
            return;
        }

        self.apply_settings(settings);
        // A fresh load discards any forward entries, as a real history does.
        if !self.history.is_empty() {
            self.history.truncate(self.position + 1);
        }
        self.history.push(url.to_owned());
        self.position = self.history.len() - 1;
        self.emit_load_finished(sink);
    }

    fn go_back(&mut self, sink: &dyn EventSink) {
        if !self.can_go_back() {
            return;
        }
        self.position -= 1;
        self.emit_navigation_changed(sink);
    }

    fn go_forward(&mut self, sink: &dyn EventSink) {
        if !self.can_go_forward() {
            return;
        }
        self.position += 1;
        self.emit_navigation_changed(sink);
    }

    fn reload(&mut self, settings: Option<&RenderSettings>, sink: &dyn EventSink) {
        if let Some(settings) = settings {
            self.apply_settings(settings);
        }
        self.emit_load_finished(sink);
    }
}

fn page_title(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_owned))
        .unwrap_or_else(|| url.to_owned())
}
