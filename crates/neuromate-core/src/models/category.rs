use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the six trait groupings the screener walks through.
///
/// Declaration order is presentation order; `Ord` follows it, so ordered
/// maps keyed by `Category` iterate in the order the respondent saw them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Social,
    Communication,
    Hyperactivity,
    Repetitive,
    Sensory,
    Learning,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Social,
        Category::Communication,
        Category::Hyperactivity,
        Category::Repetitive,
        Category::Sensory,
        Category::Learning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Social => "social",
            Category::Communication => "communication",
            Category::Hyperactivity => "hyperactivity",
            Category::Repetitive => "repetitive",
            Category::Sensory => "sensory",
            Category::Learning => "learning",
        }
    }

    /// Title-cased name used in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Social => "Social",
            Category::Communication => "Communication",
            Category::Hyperactivity => "Hyperactivity",
            Category::Repetitive => "Repetitive",
            Category::Sensory => "Sensory",
            Category::Learning => "Learning",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    /// Accepts the wire name (`"social"`) in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}
