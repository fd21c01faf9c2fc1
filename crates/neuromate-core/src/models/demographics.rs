use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Semantic field a demographic prompt fills in. Declaration order matches
/// the order the prompts are asked in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DemographicField {
    Name,
    Age,
    Gender,
    Country,
    Ethnicity,
    Relation,
    Jaundice,
    UsedAppBefore,
}

impl DemographicField {
    pub const ALL: [DemographicField; 8] = [
        DemographicField::Name,
        DemographicField::Age,
        DemographicField::Gender,
        DemographicField::Country,
        DemographicField::Ethnicity,
        DemographicField::Relation,
        DemographicField::Jaundice,
        DemographicField::UsedAppBefore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DemographicField::Name => "name",
            DemographicField::Age => "age",
            DemographicField::Gender => "gender",
            DemographicField::Country => "country",
            DemographicField::Ethnicity => "ethnicity",
            DemographicField::Relation => "relation",
            DemographicField::Jaundice => "jaundice",
            DemographicField::UsedAppBefore => "used_app_before",
        }
    }

    /// Label printed next to the value in the report's patient section.
    pub fn display_label(&self) -> &'static str {
        match self {
            DemographicField::Name => "Name",
            DemographicField::Age => "Age",
            DemographicField::Gender => "Gender",
            DemographicField::Country => "Country",
            DemographicField::Ethnicity => "Ethnicity",
            DemographicField::Relation => "Relation",
            DemographicField::Jaundice => "Has Jaundice",
            DemographicField::UsedAppBefore => "Used ASD Screening Before",
        }
    }
}

impl fmt::Display for DemographicField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DemographicField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DemographicField::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// A recorded demographic answer. Only `age` is parsed to an integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum DemographicValue {
    Integer(i64),
    Text(String),
}

impl fmt::Display for DemographicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemographicValue::Integer(v) => write!(f, "{v}"),
            DemographicValue::Text(v) => f.write_str(v),
        }
    }
}

pub type Demographics = BTreeMap<DemographicField, DemographicValue>;
