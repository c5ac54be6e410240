//! Event router
//!
//! Dispatches purely on the pair (primary state, event variant). Observer
//! notifications are only traced; everything else goes to the sub-router of
//! the current primary state. A terminated session ignores all input.

mod onboarding;
mod operational;

use crate::dispatch::Command;
use crate::machine::StateMachine;
use crate::types::{Event, PrimaryState};

/// Route one event and return the commands it produced
pub fn handle(machine: &mut StateMachine, event: Event) -> Vec<Command> {
    log::debug!("[{}] event: {}", machine.primary(), event.kind());

    match event {
        Event::StateChanged { from, to } => {
            log::debug!("state changed: {from} -> {to}");
            Vec::new()
        }
        Event::PromptRequested(prompt) => {
            log::debug!("prompt requested: {prompt:?}");
            Vec::new()
        }
        event => match machine.primary() {
            PrimaryState::Onboarding => onboarding::handle(machine, event),
            PrimaryState::Operational => operational::handle(machine, event),
            PrimaryState::Quitting => {
                log::debug!("session terminated, dropping {}", event.kind());
                Vec::new()
            }
        },
    }
}

/// Status line text for a contextual error
pub(crate) fn error_status(context: &str, message: &str) -> String {
    format!("Error [{context}]: {message}")
}

/// Leave the session from any non-terminal state
fn quit(machine: &mut StateMachine) -> Vec<Command> {
    match machine.request_transition(PrimaryState::Quitting) {
        Ok(commands) => commands,
        Err(e) => {
            log::warn!("quit rejected: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dispatch::Dispatcher;
    use crate::test_utils::{run_until_idle, MockBucketStore};
    use crate::traits::{BucketStore, NETWORK_PREFIX_KEY, SYSTEM_BUCKET};
    use crate::types::{OnboardingSubState, OperationalMode, StateId};

    fn setup() -> (StateMachine, Arc<MockBucketStore>) {
        let store = Arc::new(MockBucketStore::new());
        let machine = StateMachine::new(Some(store.clone()));
        (machine, store)
    }

    #[tokio::test]
    async fn preset_choice_moves_to_confirmation() {
        let (mut machine, _) = setup();
        let mut dispatcher = Dispatcher::current();

        let commands = handle(
            &mut machine,
            Event::PrefixChosen {
                prefix: "192.168.0.0/16".into(),
                is_custom: false,
            },
        );
        run_until_idle(&mut machine, &mut dispatcher, commands).await;

        assert_eq!(machine.onboarding(), Some(OnboardingSubState::ConfirmingPrefix));
        assert_eq!(machine.pending_prefix(), Some("192.168.0.0/16"));
    }

    #[tokio::test]
    async fn confirmed_prefix_is_saved_and_session_goes_operational() {
        let (mut machine, store) = setup();
        let mut dispatcher = Dispatcher::current();
        machine
            .request_sub_transition(OnboardingSubState::ConfirmingPrefix, "192.168.0.0/16")
            .unwrap();

        let commands = handle(
            &mut machine,
            Event::PrefixConfirmed {
                confirmed: true,
                prefix: "192.168.0.0/16".into(),
            },
        );
        assert_eq!(machine.onboarding(), Some(OnboardingSubState::SavingToStore));

        run_until_idle(&mut machine, &mut dispatcher, commands).await;

        assert_eq!(machine.primary(), PrimaryState::Operational);
        assert_eq!(machine.mode(), Some(OperationalMode::List));
        assert_eq!(
            store.get(SYSTEM_BUCKET, NETWORK_PREFIX_KEY).await,
            Some(b"192.168.0.0/16".to_vec())
        );
    }

    #[tokio::test]
    async fn declined_prefix_returns_to_selection() {
        let (mut machine, _) = setup();
        let mut dispatcher = Dispatcher::current();
        machine
            .request_sub_transition(OnboardingSubState::ConfirmingPrefix, "10.0.0.0/8")
            .unwrap();

        let commands = handle(
            &mut machine,
            Event::PrefixConfirmed {
                confirmed: false,
                prefix: "10.0.0.0/8".into(),
            },
        );
        run_until_idle(&mut machine, &mut dispatcher, commands).await;

        assert_eq!(machine.onboarding(), Some(OnboardingSubState::SelectingPrefix));
        assert_eq!(machine.pending_prefix(), None);
    }

    #[tokio::test]
    async fn detail_with_empty_id_keeps_list() {
        let (mut machine, _) = setup();
        let mut dispatcher = Dispatcher::current();
        let commands = machine
            .request_transition(PrimaryState::Operational)
            .unwrap();
        run_until_idle(&mut machine, &mut dispatcher, commands).await;

        let commands = handle(&mut machine, Event::EnterDetail { id: String::new() });
        assert!(commands.is_empty());
        assert_eq!(machine.mode(), Some(OperationalMode::List));
    }

    #[tokio::test]
    async fn failed_write_reports_and_returns_to_selection() {
        let (mut machine, store) = setup();
        let mut dispatcher = Dispatcher::current();
        store.set_put_error(Some("disk full".into())).await;

        let commands = machine
            .request_sub_transition(OnboardingSubState::SavingToStore, "10.0.0.0/8")
            .unwrap();
        run_until_idle(&mut machine, &mut dispatcher, commands).await;

        assert!(machine.status().contains("disk full"));
        assert_eq!(machine.primary(), PrimaryState::Onboarding);
        assert_eq!(machine.onboarding(), Some(OnboardingSubState::SelectingPrefix));
        assert_eq!(store.get(SYSTEM_BUCKET, NETWORK_PREFIX_KEY).await, None);
    }

    #[test]
    fn redelivered_state_change_is_inert() {
        let (mut machine, _) = setup();
        machine
            .request_sub_transition(OnboardingSubState::ConfirmingPrefix, "10.0.0.0/8")
            .unwrap();
        let before = machine.snapshot();

        let notification = Event::StateChanged {
            from: StateId::Onboarding(OnboardingSubState::SelectingPrefix),
            to: StateId::Onboarding(OnboardingSubState::ConfirmingPrefix),
        };
        for _ in 0..3 {
            assert!(handle(&mut machine, notification.clone()).is_empty());
        }
        assert_eq!(machine.snapshot(), before);
    }

    #[test]
    fn quit_is_terminal() {
        let (mut machine, _) = setup();
        handle(&mut machine, Event::Quit);
        assert!(machine.is_quitting());

        let before = machine.snapshot();
        for event in [
            Event::Quit,
            Event::EnterList,
            Event::Status {
                text: "late".into(),
            },
        ] {
            assert!(handle(&mut machine, event).is_empty());
        }
        assert_eq!(machine.snapshot(), before);
    }

    #[test]
    fn status_is_shown_during_onboarding() {
        let (mut machine, _) = setup();
        handle(
            &mut machine,
            Event::Status {
                text: "hello".into(),
            },
        );
        assert_eq!(machine.status(), "hello");
    }

    #[tokio::test]
    async fn list_entry_loads_record_ids() {
        let (mut machine, store) = setup();
        store
            .put(crate::traits::RECORDS_BUCKET, b"r-1", b"{}")
            .await
            .unwrap();
        let mut dispatcher = Dispatcher::current();

        let commands = machine
            .request_transition(PrimaryState::Operational)
            .unwrap();
        run_until_idle(&mut machine, &mut dispatcher, commands).await;

        assert_eq!(machine.record_ids(), ["r-1".to_string()]);
    }
}
