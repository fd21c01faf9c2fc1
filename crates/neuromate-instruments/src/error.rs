use neuromate_core::models::demographics::DemographicField;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("invalid answer for '{field}': {answer:?} is not a whole number")]
    InvalidAnswerFormat {
        field: DemographicField,
        answer: String,
    },
}
