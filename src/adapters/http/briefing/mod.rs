//! Briefing HTTP module.
//!
//! Exposes the submission endpoint consumed by the wizard.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{BriefingAppState, DELIVERY_FAILED_MESSAGE, METHOD_NOT_ALLOWED_MESSAGE};
pub use routes::briefing_router;
