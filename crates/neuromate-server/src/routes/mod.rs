pub mod health;
pub mod questions;
pub mod reports;
pub mod sessions;

use uuid::Uuid;

use crate::error::ApiError;

/// Ids that do not parse can never name a live session.
pub(crate) fn parse_session_id(raw: Option<&str>) -> Result<Uuid, ApiError> {
    let raw = raw.unwrap_or_default();
    Uuid::parse_str(raw.trim())
        .map_err(|_| ApiError::NotFound(format!("session not found: {raw}")))
}
