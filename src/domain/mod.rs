//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, state machine trait, errors)
//! - `briefing` - The briefing aggregate, service catalog and language tables
//! - `wizard` - The client-side step machine that collects a briefing

pub mod briefing;
pub mod foundation;
pub mod wizard;
