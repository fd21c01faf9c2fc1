use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;

use neuromate_core::models::report::ReportData;
use neuromate_export::error::ExportError;
use neuromate_export::styles::DocumentStyles;
use neuromate_export::{build_report_docx, build_report_pdf};

use super::parse_session_id;
use super::sessions::SessionRequest;
use crate::error::ApiError;
use crate::state::AppState;

const PDF_CONTENT_TYPE: &str = "application/pdf";
const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

type Builder = fn(&ReportData, &DocumentStyles) -> Result<Vec<u8>, ExportError>;

/// Download the screening report for a completed session as PDF.
pub async fn generate_report(
    State(state): State<AppState>,
    Json(request): Json<SessionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    download(state, request, build_report_pdf, PDF_CONTENT_TYPE, "pdf").await
}

/// Same report as an editable DOCX document.
pub async fn generate_report_docx(
    State(state): State<AppState>,
    Json(request): Json<SessionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    download(state, request, build_report_docx, DOCX_CONTENT_TYPE, "docx").await
}

async fn download(
    state: AppState,
    request: SessionRequest,
    build: Builder,
    content_type: &'static str,
    extension: &'static str,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_session_id(request.session_id.as_deref())?;
    let report = state.sessions.export(id).await?;

    let styles = state.styles.clone();
    let bytes = tokio::task::spawn_blocking(move || build(&report, &styles))
        .await
        .map_err(|e| ApiError::Internal(format!("report task failed: {e}")))??;

    Ok((
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=NeuroMate_Report_{id}.{extension}"),
            ),
        ],
        bytes,
    ))
}
