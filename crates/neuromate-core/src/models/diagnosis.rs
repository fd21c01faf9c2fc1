use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::Category;

/// Per-category severity tier derived from that category's raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Severity {
    Normal,
    Mild,
    Moderate,
    High,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Normal => "Normal",
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
            Severity::Severe => "Severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Headline classification of a completed screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Label {
    #[serde(rename = "No ASD")]
    NoAsd,
    #[serde(rename = "At Risk")]
    AtRisk,
    #[serde(rename = "Probable ASD")]
    ProbableAsd,
    #[serde(rename = "Likely ASD")]
    LikelyAsd,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::NoAsd => "No ASD",
            Label::AtRisk => "At Risk",
            Label::ProbableAsd => "Probable ASD",
            Label::LikelyAsd => "Likely ASD",
        }
    }

    /// Next-step bullets printed under "Recommended Next Steps" in the report.
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            Label::NoAsd => &[
                "No significant indicators detected.",
                "Continue normal social development.",
                "Re-evaluate if future symptoms appear.",
            ],
            Label::AtRisk => &[
                "Mild ASD indicators detected.",
                "Encourage communication-based play.",
                "Monitor behaviour over 3-6 months.",
            ],
            Label::ProbableAsd => &[
                "Moderate ASD indicators detected.",
                "Seek developmental specialist consultation.",
                "Initiate early intervention activities.",
            ],
            Label::LikelyAsd => &[
                "Strong ASD indicators detected.",
                "Immediate professional evaluation recommended.",
                "Begin structured intervention programs.",
            ],
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Frozen outcome of a screening session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisResult {
    pub label: Label,
    /// Guidance text tied to the classification branch that produced `label`.
    pub guidance: String,
    pub per_category_labels: BTreeMap<Category, Severity>,
    pub total_yes: u32,
}
