//! State machine trait for step and status enums.
//!
//! Gives every enumerated state the same vocabulary for checking and
//! performing transitions, so navigation rules live in one table per type.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for WizardStep {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         self.valid_transitions().contains(target)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Services => vec![ProjectDetails],
///             // ... etc
///         }
///     }
/// }
///
/// let next = WizardStep::Services.transition_to(WizardStep::ProjectDetails)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
