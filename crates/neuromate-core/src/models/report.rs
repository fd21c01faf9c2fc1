use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::AnswerRecord;
use super::demographics::Demographics;
use super::diagnosis::DiagnosisResult;
use super::score::CategoryScores;

/// Read-only export of a completed session, handed to the report renderer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportData {
    pub session_id: Uuid,
    pub generated_at: jiff::Timestamp,
    pub demographics: Demographics,
    pub scores: CategoryScores,
    pub result: DiagnosisResult,
    pub answers: Vec<AnswerRecord>,
}
