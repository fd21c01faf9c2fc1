use std::sync::Arc;

use neuromate_export::styles::DocumentStyles;
use neuromate_session::SessionStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub styles: Arc<DocumentStyles>,
}

impl AppState {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self {
            sessions,
            styles: Arc::new(DocumentStyles::default()),
        }
    }
}
