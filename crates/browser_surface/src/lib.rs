//! Browser surface: the embedded content-renderer seam.
//!
//! The host drives an opaque [`WebSurface`] with URLs and [`RenderSettings`]
//! and receives [`SurfaceEvent`]s back. A [`HeadlessSurface`] reference
//! implementation simulates a linear page history for the shell and tests.
mod filter;
mod handle;
mod surface;
mod types;

pub use filter::{PassThroughFilter, RequestFilter};
pub use handle::SurfaceHandle;
pub use surface::{ChannelEventSink, EventSink, HeadlessSurface, WebSurface};
pub use types::{DetectorMode, RenderSettings, SurfaceEvent, SurfaceRequest};
