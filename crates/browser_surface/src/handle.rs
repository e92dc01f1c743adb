use std::sync::mpsc;
use std::thread;

use crate::surface::{ChannelEventSink, EventSink, WebSurface};
use crate::types::{RenderSettings, SurfaceEvent};

enum SurfaceCommand {
    Render {
        url: String,
        settings: RenderSettings,
    },
    GoBack,
    GoForward,
    Reload {
        settings: Option<RenderSettings>,
    },
}

/// Owning handle to a web surface running on its own thread.
///
/// The surface is injected once at construction and never replaced for the
/// life of the handle. Commands go over a channel to the worker; events come
/// back through [`try_recv`](Self::try_recv). The worker exits when the
/// handle is dropped and the command channel closes.
pub struct SurfaceHandle {
    cmd_tx: mpsc::Sender<SurfaceCommand>,
    event_rx: mpsc::Receiver<SurfaceEvent>,
}

impl SurfaceHandle {
    pub fn new(mut surface: Box<dyn WebSurface>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let sink = ChannelEventSink::new(event_tx);
            while let Ok(command) = cmd_rx.recv() {
                dispatch(surface.as_mut(), command, &sink);
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn render(&self, url: impl Into<String>, settings: RenderSettings) {
        let _ = self.cmd_tx.send(SurfaceCommand::Render {
            url: url.into(),
            settings,
        });
    }

    pub fn go_back(&self) {
        let _ = self.cmd_tx.send(SurfaceCommand::GoBack);
    }

    pub fn go_forward(&self) {
        let _ = self.cmd_tx.send(SurfaceCommand::GoForward);
    }

    pub fn reload(&self, settings: Option<RenderSettings>) {
        let _ = self.cmd_tx.send(SurfaceCommand::Reload { settings });
    }

    /// Next pending surface event, if any.
    pub fn try_recv(&self) -> Option<SurfaceEvent> {
        self.event_rx.try_recv().ok()
    }
}

fn dispatch(surface: &mut dyn WebSurface, command: SurfaceCommand, sink: &dyn EventSink) {
    match command {
        SurfaceCommand::Render { url, settings } => surface.render(&url, &settings, sink),
        SurfaceCommand::GoBack => surface.go_back(sink),
        SurfaceCommand::GoForward => surface.go_forward(sink),
        SurfaceCommand::Reload { settings } => surface.reload(settings.as_ref(), sink),
    }
}
