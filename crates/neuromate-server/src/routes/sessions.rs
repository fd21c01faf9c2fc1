use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;
use uuid::Uuid;

use neuromate_core::models::category::Category;
use neuromate_core::models::diagnosis::{DiagnosisResult, Label, Severity};
use neuromate_session::NextStep;

use super::parse_session_id;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct StartSessionResponse {
    pub session_id: Uuid,
    pub next_question: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    /// Any JSON scalar; see [`answer_text`].
    #[serde(default)]
    pub answer: Value,
}

/// The frozen result as the frontend reads it.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct FinalResultResponse {
    #[serde(rename = "ASD_result")]
    pub asd_result: Label,
    pub guidance: String,
    pub total_yes: u32,
    pub per_category_labels: BTreeMap<Category, Severity>,
}

impl From<DiagnosisResult> for FinalResultResponse {
    fn from(result: DiagnosisResult) -> Self {
        Self {
            asd_result: result.label,
            guidance: result.guidance,
            total_yes: result.total_yes,
            per_category_labels: result.per_category_labels,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnswerResponse {
    Next {
        next_question: String,
    },
    Final {
        #[serde(rename = "final")]
        is_final: bool,
        #[serde(flatten)]
        result: FinalResultResponse,
    },
}

pub async fn start_session(State(state): State<AppState>) -> Json<StartSessionResponse> {
    let (session_id, next_question) = state.sessions.start().await;
    Json(StartSessionResponse {
        session_id,
        next_question,
    })
}

pub async fn submit_answer(
    State(state): State<AppState>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, ApiError> {
    let id = parse_session_id(request.session_id.as_deref())?;
    let answer = answer_text(&request.answer);

    let response = match state.sessions.submit(id, &answer).await? {
        NextStep::Prompt(next_question) => AnswerResponse::Next { next_question },
        NextStep::Final(result) => AnswerResponse::Final {
            is_final: true,
            result: result.into(),
        },
    };
    Ok(Json(response))
}

pub async fn predict_final(
    State(state): State<AppState>,
    Json(request): Json<SessionRequest>,
) -> Result<Json<FinalResultResponse>, ApiError> {
    let id = parse_session_id(request.session_id.as_deref())?;
    let result = state.sessions.final_result(id).await?;
    Ok(Json(result.into()))
}

/// Text form of a submitted answer. Booleans and numbers are spelled out,
/// `null` is the empty answer.
pub fn answer_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
