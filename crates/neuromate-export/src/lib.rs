//! neuromate-export
//!
//! Screening report generation: a Tera template renders the frozen session
//! into a small Markdown subset, which is then laid out as a PDF (the
//! download the client expects) or a DOCX document.

pub mod docx;
pub mod error;
pub mod pdf;
pub mod render;
pub mod styles;

use neuromate_core::models::report::ReportData;

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Render `report` with the built-in template and lay it out as PDF bytes.
pub fn build_report_pdf(
    report: &ReportData,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let rendered = render::render_report(report)?;
    let bytes = pdf::generate_pdf(&rendered, styles)?;
    tracing::info!(
        session_id = %report.session_id,
        format = "pdf",
        bytes = bytes.len(),
        "report exported"
    );
    Ok(bytes)
}

/// Render `report` with the built-in template and pack it as DOCX bytes.
pub fn build_report_docx(
    report: &ReportData,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let rendered = render::render_report(report)?;
    let bytes = docx::generate_docx(&rendered, styles)?;
    tracing::info!(
        session_id = %report.session_id,
        format = "docx",
        bytes = bytes.len(),
        "report exported"
    );
    Ok(bytes)
}
