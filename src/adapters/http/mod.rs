//! HTTP adapters.
//!
//! - `briefing` - axum routes for the submission endpoint
//! - `client` - reqwest submitter used by the wizard

pub mod briefing;
pub mod client;

pub use briefing::{briefing_router, BriefingAppState};
pub use client::HttpBriefingSubmitter;
