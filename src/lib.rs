//! Smart Corner - Project Briefing Pipeline
//!
//! A guided five-step wizard collects a project briefing and submits it to a
//! server that writes an AI summary and mails the operator and the client.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
