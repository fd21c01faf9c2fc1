use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::Category;

/// One category-phase answer as it was given. Demographic answers are not
/// logged here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerRecord {
    pub category: Category,
    pub question: String,
    /// Normalized (trimmed, lower-cased) answer text.
    pub answer: String,
}
