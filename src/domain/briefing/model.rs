//! BriefingModel - the aggregate built field-by-field by the wizard.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Complete set of project requirements collected by the wizard.
///
/// Serialized in camelCase so the same type is the client payload and the
/// server request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefingModel {
    /// Selected service identifiers, unique, in insertion order.
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub details: ProjectDetails,
    #[serde(default)]
    pub timeline: Timeline,
    #[serde(default)]
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDetails {
    pub project_name: String,
    pub description: String,
    pub target_audience: String,
    pub specific_goals: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Timeline {
    pub deadline: String,
    pub budget_range: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub gdpr_consent: bool,
}

/// Section of the briefing a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Details,
    Timeline,
    Contact,
}

/// A single field assignment.
///
/// Each variant names one field of one section; applying it touches that
/// field only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    ProjectName(String),
    Description(String),
    TargetAudience(String),
    SpecificGoals(String),
    Deadline(String),
    BudgetRange(String),
    FullName(String),
    Email(String),
    Company(String),
    Phone(String),
    GdprConsent(bool),
}

impl FieldUpdate {
    /// Section the updated field lives in.
    pub fn section(&self) -> Section {
        match self {
            FieldUpdate::ProjectName(_)
            | FieldUpdate::Description(_)
            | FieldUpdate::TargetAudience(_)
            | FieldUpdate::SpecificGoals(_) => Section::Details,
            FieldUpdate::Deadline(_) | FieldUpdate::BudgetRange(_) => Section::Timeline,
            FieldUpdate::FullName(_)
            | FieldUpdate::Email(_)
            | FieldUpdate::Company(_)
            | FieldUpdate::Phone(_)
            | FieldUpdate::GdprConsent(_) => Section::Contact,
        }
    }
}

impl BriefingModel {
    /// Creates an empty briefing, as at wizard start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the service if absent, removes it if present.
    pub fn toggle_service(&mut self, id: &str) {
        if let Some(pos) = self.services.iter().position(|s| s == id) {
            self.services.remove(pos);
        } else {
            self.services.push(id.to_string());
        }
    }

    /// Merges a single field value into its section.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::ProjectName(v) => self.details.project_name = v,
            FieldUpdate::Description(v) => self.details.description = v,
            FieldUpdate::TargetAudience(v) => self.details.target_audience = v,
            FieldUpdate::SpecificGoals(v) => self.details.specific_goals = v,
            FieldUpdate::Deadline(v) => self.timeline.deadline = v,
            FieldUpdate::BudgetRange(v) => self.timeline.budget_range = v,
            FieldUpdate::FullName(v) => self.contact.full_name = v,
            FieldUpdate::Email(v) => self.contact.email = v,
            FieldUpdate::Company(v) => self.contact.company = v,
            FieldUpdate::Phone(v) => self.contact.phone = v,
            FieldUpdate::GdprConsent(v) => self.contact.gdpr_consent = v,
        }
    }

    /// Step 1 gate: at least one service selected.
    pub fn validate_services(&self) -> Result<(), ValidationError> {
        if self.services.is_empty() {
            return Err(ValidationError::empty_field("services"));
        }
        Ok(())
    }

    /// Step 2 gate: project name and description present.
    pub fn validate_details(&self) -> Result<(), ValidationError> {
        require("projectName", &self.details.project_name)?;
        require("description", &self.details.description)
    }

    /// Step 3 gate: deadline and budget range chosen.
    pub fn validate_timeline(&self) -> Result<(), ValidationError> {
        require("deadline", &self.timeline.deadline)?;
        require("budgetRange", &self.timeline.budget_range)
    }

    /// Step 4 gate: required contact fields present and consent given.
    pub fn validate_contact(&self) -> Result<(), ValidationError> {
        require("fullName", &self.contact.full_name)?;
        require("email", &self.contact.email)?;
        if !is_valid_email(&self.contact.email) {
            return Err(ValidationError::invalid_format(
                "email",
                "expected an address like name@example.com",
            ));
        }
        if !self.contact.gdpr_consent {
            return Err(ValidationError::consent_required("gdprConsent"));
        }
        Ok(())
    }
}

fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::empty_field(field))
    } else {
        Ok(())
    }
}

/// Syntactic email check: one `@`, non-empty local part, dotted domain, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty() && !tld.is_empty() && !domain.starts_with('.') && !domain.contains("..")
        }
        None => false,
    }
}
