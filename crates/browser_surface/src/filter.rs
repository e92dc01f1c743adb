use crate::types::SurfaceRequest;

/// Decides whether the surface may perform a request.
///
/// Hook point for future content filtering; nothing in the workspace blocks
/// anything today.
pub trait RequestFilter: Send + Sync {
    fn should_allow(&self, request: &SurfaceRequest) -> bool;
}

/// Allows every request.
#[derive(Debug, Default)]
pub struct PassThroughFilter;

impl RequestFilter for PassThroughFilter {
    fn should_allow(&self, _request: &SurfaceRequest) -> bool {
        true
    }
}
