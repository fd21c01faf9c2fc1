use axum::extract::State;
use axum::Json;

use neuromate_instruments::Catalog;

use crate::state::AppState;

/// The full question catalog (public, no session required).
pub async fn list_questions(State(state): State<AppState>) -> Json<&'static Catalog> {
    Json(state.sessions.catalog())
}
