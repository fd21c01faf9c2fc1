use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct RootMessage {
    message: &'static str,
}

#[derive(Serialize)]
pub struct HealthStatus {
    status: &'static str,
    sessions: usize,
}

pub async fn root() -> Json<RootMessage> {
    Json(RootMessage {
        message: "NeuroMate ASD Screening API Running",
    })
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        sessions: state.sessions.len().await,
    })
}
