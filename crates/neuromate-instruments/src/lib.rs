//! neuromate-instruments
//!
//! The screening instrument itself: the question catalog, the answer
//! normalization policy, and the rule-based diagnosis classifier.
//! Pure data and pure functions, no async and no I/O.

pub mod answer;
pub mod catalog;
pub mod error;
pub mod scoring;

pub use catalog::Catalog;
pub use scoring::classify;
