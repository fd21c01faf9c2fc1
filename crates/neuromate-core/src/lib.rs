//! neuromate-core
//!
//! Pure domain types shared by every NeuroMate crate: trait categories,
//! demographic fields, answer records and the diagnosis result shape.
//! No I/O, no async.

pub mod error;
pub mod models;
