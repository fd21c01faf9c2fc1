use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::Category;

/// Affirmative-answer count per category.
///
/// Always holds an entry for every [`Category`]; construction starts all six
/// at zero and the only mutation is [`CategoryScores::increment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct CategoryScores(BTreeMap<Category, u32>);

impl CategoryScores {
    pub fn new() -> Self {
        Self(Category::ALL.iter().map(|c| (*c, 0)).collect())
    }

    pub fn get(&self, category: Category) -> u32 {
        self.0.get(&category).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, category: Category) {
        *self.0.entry(category).or_insert(0) += 1;
    }

    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        self.0.iter().map(|(c, v)| (*c, *v))
    }
}

impl Default for CategoryScores {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(Category, u32)> for CategoryScores {
    /// Categories missing from the iterator are filled in at zero.
    fn from_iter<I: IntoIterator<Item = (Category, u32)>>(iter: I) -> Self {
        let mut scores = Self::new();
        for (category, value) in iter {
            scores.0.insert(category, value);
        }
        scores
    }
}
