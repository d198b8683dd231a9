//! WizardStep - the five wizard states and their transition table.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Wizard state. Steps 1-4 collect data; 5 is the terminal confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Services,
    ProjectDetails,
    Timeline,
    Contact,
    Confirmation,
}

/// Navigation input to the step machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardAction {
    Next,
    Back,
    /// The submission call resolved, successfully or not.
    SubmissionResolved,
}

impl WizardStep {
    /// 1-based step number.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Services => 1,
            WizardStep::ProjectDetails => 2,
            WizardStep::Timeline => 3,
            WizardStep::Contact => 4,
            WizardStep::Confirmation => 5,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(WizardStep::Services),
            2 => Some(WizardStep::ProjectDetails),
            3 => Some(WizardStep::Timeline),
            4 => Some(WizardStep::Contact),
            5 => Some(WizardStep::Confirmation),
            _ => None,
        }
    }

    /// Transition table. `None` means the action does nothing in this state.
    ///
    /// `Next` from `Contact` is absent: leaving step 4 goes through a
    /// submission and only `SubmissionResolved` reaches `Confirmation`.
    pub fn apply(&self, action: WizardAction) -> Option<Self> {
        use WizardAction::*;
        use WizardStep::*;
        match (self, action) {
            (Services, Next) => Some(ProjectDetails),
            (ProjectDetails, Next) => Some(Timeline),
            (Timeline, Next) => Some(Contact),
            (ProjectDetails, Back) => Some(Services),
            (Timeline, Back) => Some(ProjectDetails),
            (Contact, Back) => Some(Timeline),
            (Contact, SubmissionResolved) => Some(Confirmation),
            _ => None,
        }
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        [
            WizardAction::Next,
            WizardAction::Back,
            WizardAction::SubmissionResolved,
        ]
        .into_iter()
        .filter_map(|action| self.apply(action))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [WizardStep; 5] = [
        WizardStep::Services,
        WizardStep::ProjectDetails,
        WizardStep::Timeline,
        WizardStep::Contact,
        WizardStep::Confirmation,
    ];

    #[test]
    fn numbers_round_trip() {
        for step in ALL {
            assert_eq!(WizardStep::from_number(step.number()), Some(step));
        }
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(6), None);
    }

    #[test]
    fn transitions_are_single_steps() {
        for step in ALL {
            for target in step.valid_transitions() {
                let distance = (target.number() as i8 - step.number() as i8).abs();
                assert_eq!(distance, 1, "{:?} -> {:?} skips a step", step, target);
            }
        }
    }

    #[test]
    fn back_is_noop_at_first_step() {
        assert_eq!(WizardStep::Services.apply(WizardAction::Back), None);
    }

    #[test]
    fn contact_does_not_advance_without_submission() {
        assert_eq!(WizardStep::Contact.apply(WizardAction::Next), None);
        assert_eq!(
            WizardStep::Contact.apply(WizardAction::SubmissionResolved),
            Some(WizardStep::Confirmation)
        );
    }

    #[test]
    fn confirmation_is_the_only_terminal_step() {
        for step in ALL {
            assert_eq!(step.is_terminal(), step == WizardStep::Confirmation);
        }
    }

    #[test]
    fn confirmation_cannot_be_reached_from_earlier_steps() {
        assert!(WizardStep::Timeline
            .transition_to(WizardStep::Confirmation)
            .is_err());
        assert!(WizardStep::Contact
            .transition_to(WizardStep::Confirmation)
            .is_ok());
    }
}
