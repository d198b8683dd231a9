//! Briefing module - the data collected by the wizard and shipped to the server.
//!
//! - `BriefingModel` and its sections, with the per-step validation predicates
//! - `ServiceCatalog` - static service offerings and the price estimate
//! - `Language` / `LanguagePack` - supported languages and the strings logic depends on
//! - `SubmissionPayload` / `SubmissionResult` - the wire shapes of one submission

mod catalog;
mod language;
mod model;
mod submission;

pub use catalog::{ServiceCatalog, ServiceOffering};
pub use language::{Language, LanguagePack};
pub use model::{
    is_valid_email, BriefingModel, ContactInfo, FieldUpdate, ProjectDetails, Section, Timeline,
};
pub use submission::{SubmissionPayload, SubmissionResult};
