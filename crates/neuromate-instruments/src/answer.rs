//! Answer normalization.
//!
//! The screener never rejects a yes/no answer. Anything outside
//! [`AFFIRMATIVE_TOKENS`], including the empty string, counts as "no".

/// Normalized answers counted as "yes".
pub const AFFIRMATIVE_TOKENS: [&str; 6] = ["yes", "y", "true", "often", "always", "frequently"];

/// Trim surrounding whitespace and lower-case.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Exact match against [`AFFIRMATIVE_TOKENS`]. Expects an already
/// [`normalize`]d answer.
pub fn is_affirmative(normalized: &str) -> bool {
    AFFIRMATIVE_TOKENS.contains(&normalized)
}
