//! Application handlers.
//!
//! Server-side stages of the briefing pipeline and the command handler that
//! sequences them.

mod notification_dispatcher;
mod submit_briefing;
mod summary_generator;

pub use notification_dispatcher::{
    DispatchError, DispatchSettings, NotificationDispatcher, Recipient,
};
pub use submit_briefing::{SubmitBriefingHandler, SubmitBriefingResult};
pub use summary_generator::{
    SummaryGenerator, SUMMARY_EMPTY, SUMMARY_FAILED, SUMMARY_UNAVAILABLE,
};
