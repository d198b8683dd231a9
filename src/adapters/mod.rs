//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the pipeline to external systems:
//! - `ai` - text-generation providers
//! - `mail` - SMTP delivery
//! - `http` - the submission endpoint and its client

pub mod ai;
pub mod http;
pub mod mail;
