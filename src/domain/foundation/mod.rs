//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the state machine trait and the validation error
//! type that form the vocabulary of the briefing domain.

mod errors;
mod ids;
mod state_machine;

pub use errors::ValidationError;
pub use ids::SubmissionId;
pub use state_machine::StateMachine;
