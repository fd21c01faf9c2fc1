//! Rule-based diagnosis classifier.
//!
//! Headline rules are evaluated strictly in order and the first match wins:
//! any category at 5+, then any at 4, then any at 3, then two or more at
//! exactly 2, and only then the total-count fallback.

use neuromate_core::models::category::Category;
use neuromate_core::models::diagnosis::{DiagnosisResult, Label, Severity};
use neuromate_core::models::score::CategoryScores;

pub const GUIDANCE_CATEGORY_SEVERE: &str =
    "Strong signs — urgent professional evaluation recommended";
pub const GUIDANCE_CATEGORY_HIGH: &str = "High signs — screening recommended soon";
pub const GUIDANCE_CATEGORY_MODERATE: &str =
    "Moderate symptoms — consult specialist if symptoms continue";
pub const GUIDANCE_TWO_MILD: &str = "Mild signs — keep monitoring";
pub const GUIDANCE_TOTAL_LOW: &str = "Low likelihood — continue normal observation";
pub const GUIDANCE_TOTAL_SOME: &str = "Some signs present — consider observation";
pub const GUIDANCE_TOTAL_MODERATE: &str = "Moderate concerns — consider evaluation";
pub const GUIDANCE_TOTAL_STRONG: &str = "Strong indicators — specialist evaluation advised";

/// Severity tier for a single category score.
pub fn severity_for(score: u32) -> Severity {
    match score {
        0 | 1 => Severity::Normal,
        2 => Severity::Mild,
        3 => Severity::Moderate,
        4 => Severity::High,
        _ => Severity::Severe,
    }
}

/// Classify a full set of category scores.
pub fn classify(scores: &CategoryScores) -> DiagnosisResult {
    let total_yes = scores.total();
    let per_category_labels = scores
        .iter()
        .map(|(category, score)| (category, severity_for(score)))
        .collect();

    let (label, guidance) = headline(scores, total_yes);

    DiagnosisResult {
        label,
        guidance: guidance.to_string(),
        per_category_labels,
        total_yes,
    }
}

fn headline(scores: &CategoryScores, total_yes: u32) -> (Label, &'static str) {
    let values: Vec<u32> = Category::ALL.iter().map(|c| scores.get(*c)).collect();

    if values.iter().any(|v| *v >= 5) {
        return (Label::LikelyAsd, GUIDANCE_CATEGORY_SEVERE);
    }
    if values.contains(&4) {
        return (Label::ProbableAsd, GUIDANCE_CATEGORY_HIGH);
    }
    if values.contains(&3) {
        return (Label::AtRisk, GUIDANCE_CATEGORY_MODERATE);
    }
    if values.iter().filter(|v| **v == 2).count() >= 2 {
        return (Label::AtRisk, GUIDANCE_TWO_MILD);
    }

    match total_yes {
        0..=2 => (Label::NoAsd, GUIDANCE_TOTAL_LOW),
        3..=6 => (Label::AtRisk, GUIDANCE_TOTAL_SOME),
        7..=12 => (Label::ProbableAsd, GUIDANCE_TOTAL_MODERATE),
        _ => (Label::LikelyAsd, GUIDANCE_TOTAL_STRONG),
    }
}
