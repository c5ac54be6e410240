//! Transition validation rules
//!
//! Pure predicates consulted before the machine commits a transition.

use crate::error::TransitionError;
use crate::types::{OnboardingSubState, PrimaryState};

/// Validate a primary state transition
pub fn primary(
    from: PrimaryState,
    to: PrimaryState,
    has_store: bool,
) -> Result<(), TransitionError> {
    match (from, to) {
        (PrimaryState::Quitting, _) => Err(TransitionError::Terminal),
        (_, PrimaryState::Operational) if !has_store => Err(TransitionError::MissingDependency),
        _ => Ok(()),
    }
}

/// Validate an onboarding sub-state transition
pub fn onboarding_sub(to: OnboardingSubState, prefix: &str) -> Result<(), TransitionError> {
    if to.requires_prefix() && prefix.is_empty() {
        return Err(TransitionError::PrefixRequired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_PRIMARY: [PrimaryState; 3] = [
        PrimaryState::Onboarding,
        PrimaryState::Operational,
        PrimaryState::Quitting,
    ];

    const ALL_SUB: [OnboardingSubState; 4] = [
        OnboardingSubState::SelectingPrefix,
        OnboardingSubState::EnteringCustomPrefix,
        OnboardingSubState::ConfirmingPrefix,
        OnboardingSubState::SavingToStore,
    ];

    #[test]
    fn quitting_is_terminal_for_every_target() {
        for to in ALL_PRIMARY {
            for has_store in [true, false] {
                assert_eq!(
                    primary(PrimaryState::Quitting, to, has_store),
                    Err(TransitionError::Terminal)
                );
            }
        }
    }

    #[test]
    fn operational_needs_store() {
        assert_eq!(
            primary(PrimaryState::Onboarding, PrimaryState::Operational, false),
            Err(TransitionError::MissingDependency)
        );
        assert_eq!(
            primary(PrimaryState::Onboarding, PrimaryState::Operational, true),
            Ok(())
        );
    }

    #[test]
    fn quitting_is_always_reachable() {
        for from in [PrimaryState::Onboarding, PrimaryState::Operational] {
            assert_eq!(primary(from, PrimaryState::Quitting, false), Ok(()));
        }
    }

    #[test]
    fn confirm_and_save_need_prefix() {
        for to in [
            OnboardingSubState::ConfirmingPrefix,
            OnboardingSubState::SavingToStore,
        ] {
            assert_eq!(onboarding_sub(to, ""), Err(TransitionError::PrefixRequired));
            for prefix in ["10.0.0.0/8", "x", "fd00::/8"] {
                assert_eq!(onboarding_sub(to, prefix), Ok(()));
            }
        }
    }

    #[test]
    fn selection_steps_accept_empty_prefix() {
        for to in ALL_SUB.into_iter().filter(|s| !s.requires_prefix()) {
            assert_eq!(onboarding_sub(to, ""), Ok(()));
        }
    }
}
