use std::sync::Arc;

use crate::llm_client::GenerativeModel;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The model client is constructed once at startup and carried as a trait
/// object so tests can swap in a scripted double without global mutation.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn GenerativeModel>,
}
