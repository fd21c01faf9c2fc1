//! neuromate-session
//!
//! The screening session engine. [`session::Session`] is the per-respondent
//! state machine; [`store::SessionStore`] owns every live session and
//! serializes access per session id.

pub mod error;
pub mod session;
pub mod store;

pub use session::{NextStep, Session};
pub use store::SessionStore;
