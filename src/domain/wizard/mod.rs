//! Wizard module - the client-side step machine that collects a briefing.

mod controller;
mod step;

pub use controller::WizardController;
pub use step::{WizardAction, WizardStep};
