//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the briefing pipeline and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - text-generation service used for briefing summaries
//! - `MailTransport` - mail-delivery channel for notifications
//! - `BriefingSubmitter` - client-side transport carrying a briefing to the server

mod ai_provider;
mod briefing_submitter;
mod mail_transport;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use briefing_submitter::{BriefingSubmitter, SubmitError};
pub use mail_transport::{EmailBody, MailError, MailTransport, OutgoingEmail};
