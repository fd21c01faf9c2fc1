//! The question catalog.
//!
//! Demographic prompts come first, each bound to the field it fills in and
//! the parser applied to its answer. Six trait categories follow, each with
//! exactly [`QUESTIONS_PER_CATEGORY`] yes/no prompts. The first prompt of a
//! category decides whether the rest of it is asked.

use std::sync::LazyLock;

use neuromate_core::models::category::Category;
use neuromate_core::models::demographics::{DemographicField, DemographicValue};
use serde::Serialize;
use ts_rs::TS;

use crate::error::InstrumentError;

pub const QUESTIONS_PER_CATEGORY: usize = 5;

/// How a demographic answer is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldParser {
    Text,
    Integer,
}

impl FieldParser {
    pub fn parse(
        &self,
        field: DemographicField,
        normalized: &str,
    ) -> Result<DemographicValue, InstrumentError> {
        match self {
            FieldParser::Text => Ok(DemographicValue::Text(normalized.to_string())),
            FieldParser::Integer => normalized
                .parse::<i64>()
                .map(DemographicValue::Integer)
                .map_err(|_| InstrumentError::InvalidAnswerFormat {
                    field,
                    answer: normalized.to_string(),
                }),
        }
    }
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct DemographicPrompt {
    pub field: DemographicField,
    pub prompt: String,
    pub parser: FieldParser,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct CategoryPrompts {
    pub category: Category,
    pub prompts: Vec<String>,
}

/// Ordered, immutable question catalog. Serializes as the full list of
/// prompts for clients that want to show progress.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Catalog {
    demographics: Vec<DemographicPrompt>,
    categories: Vec<CategoryPrompts>,
}

impl Catalog {
    /// The NeuroMate screener, built once per process.
    pub fn standard() -> &'static Catalog {
        static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
            let demographics = [
                (DemographicField::Name, "What is your name?", FieldParser::Text),
                (DemographicField::Age, "How old are you?", FieldParser::Integer),
                (DemographicField::Gender, "What is your gender?", FieldParser::Text),
                (
                    DemographicField::Country,
                    "Which country/locality are you from?",
                    FieldParser::Text,
                ),
                (DemographicField::Ethnicity, "What is your ethnicity?", FieldParser::Text),
                (
                    DemographicField::Relation,
                    "What is your relation to the child? (Self/Parent/Guardian)",
                    FieldParser::Text,
                ),
                (
                    DemographicField::Jaundice,
                    "Did you have jaundice during childhood? (yes/no)",
                    FieldParser::Text,
                ),
                (
                    DemographicField::UsedAppBefore,
                    "Have you used an ASD screening app before? (yes/no)",
                    FieldParser::Text,
                ),
            ]
            .into_iter()
            .map(|(field, prompt, parser)| DemographicPrompt {
                field,
                prompt: prompt.to_string(),
                parser,
            })
            .collect();

            let categories = [
                (
                    Category::Social,
                    [
                        "Do you find it hard to maintain eye contact with people?",
                        "Do you feel uncomfortable when people try to talk to you?",
                        "Do you avoid social gatherings because they feel overwhelming?",
                        "Do you struggle to form friendships or maintain relationships?",
                        "Do you often feel disconnected even when surrounded by people?",
                    ],
                ),
                (
                    Category::Communication,
                    [
                        "Do you sometimes need extra time to respond during conversations?",
                        "Do you find it difficult to understand jokes or sarcasm?",
                        "Do you often repeat phrases or speak in a monotone tone?",
                        "Do you struggle to express your emotions clearly to others?",
                        "Do people frequently misunderstand your intentions or speech?",
                    ],
                ),
                (
                    Category::Hyperactivity,
                    [
                        "Do you feel restless or find it hard to sit still?",
                        "Do you get distracted easily during simple tasks?",
                        "Do you move your hands/legs frequently or fidget nonstop?",
                        "Do you interrupt people often or act before thinking?",
                        "Do you feel an uncontrollable urge to keep moving?",
                    ],
                ),
                (
                    Category::Repetitive,
                    [
                        "Do you enjoy having the same routine every day?",
                        "Do small changes in plans upset you?",
                        "Do you repeat certain body movements such as rocking or hand-flapping?",
                        "Do you repeat words or actions in a fixed pattern?",
                        "Do you feel anxious if routines are disrupted?",
                    ],
                ),
                (
                    Category::Sensory,
                    [
                        "Are you sensitive to loud sounds or noisy places?",
                        "Do bright lights or certain colors bother you?",
                        "Do some textures feel uncomfortable for you?",
                        "Do you get overwhelmed by too much sensory input?",
                        "Do sensory experiences cause physical pain or extreme stress?",
                    ],
                ),
                (
                    Category::Learning,
                    [
                        "Do you take longer than others to understand instructions?",
                        "Do you struggle with planning or organizing tasks?",
                        "Do you find it difficult to shift your focus to new tasks?",
                        "Do you forget steps even after learning them several times?",
                        "Do you completely shut down when given complex instructions?",
                    ],
                ),
            ]
            .into_iter()
            .map(|(category, prompts)| CategoryPrompts {
                category,
                prompts: prompts.iter().map(|p| p.to_string()).collect(),
            })
            .collect();

            Catalog {
                demographics,
                categories,
            }
        });
        &CATALOG
    }

    pub fn demographics(&self) -> &[DemographicPrompt] {
        &self.demographics
    }

    pub fn demographic_count(&self) -> usize {
        self.demographics.len()
    }

    /// # Panics
    ///
    /// Panics if `index >= self.demographic_count()`.
    pub fn demographic_prompt_at(&self, index: usize) -> &DemographicPrompt {
        &self.demographics[index]
    }

    pub fn category_names(&self) -> impl ExactSizeIterator<Item = Category> + '_ {
        self.categories.iter().map(|c| c.category)
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// # Panics
    ///
    /// Panics if `index >= self.category_count()`.
    pub fn category_at(&self, index: usize) -> Category {
        self.categories[index].category
    }

    pub fn category_length(&self, category: Category) -> usize {
        self.prompts(category).len()
    }

    /// # Panics
    ///
    /// Panics if `index >= self.category_length(category)`.
    pub fn prompt_at(&self, category: Category, index: usize) -> &str {
        &self.prompts(category)[index]
    }

    /// The prompt a fresh session opens with.
    pub fn first_prompt(&self) -> &str {
        &self.demographic_prompt_at(0).prompt
    }

    fn prompts(&self, category: Category) -> &[String] {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.prompts.as_slice())
            .unwrap_or(&[])
    }
}
