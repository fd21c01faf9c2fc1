//! neuromate-server
//!
//! HTTP transport for the screening engine. Route shapes match the NeuroMate
//! web frontend.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod sweeper;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health_check))
        .route("/questions", get(routes::questions::list_questions))
        .route("/start_session", post(routes::sessions::start_session))
        .route("/answer", post(routes::sessions::submit_answer))
        .route("/predict_final", post(routes::sessions::predict_final))
        .route(
            "/generate-report-session",
            post(routes::reports::generate_report),
        )
        .route(
            "/generate-report-session/docx",
            post(routes::reports::generate_report_docx),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
