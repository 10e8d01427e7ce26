// src/host/launch_host.rs
//
// Launch host - the external execution context that turns a resolved request
// (plain or chooser-flavored) into an actual running component.

use crate::domain::dispatch::LaunchRequest;
use crate::error::AppResult;

/// The active foreground execution context capable of starting a request.
///
/// The dispatch core issues at most one launch call per dispatch invocation
/// and never retries; launch failures are the host's responsibility to
/// surface.
#[cfg_attr(test, mockall::automock)]
pub trait LaunchHost: Send + Sync {
    fn launch(&self, request: &LaunchRequest) -> AppResult<()>;
}
