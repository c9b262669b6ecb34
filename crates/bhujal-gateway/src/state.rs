use std::path::PathBuf;

use bhujal_upstream::client::UpstreamClient;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
    /// Directory staged uploads are written to for the duration of one
    /// forwarding call.
    pub staging_dir: PathBuf,
}
