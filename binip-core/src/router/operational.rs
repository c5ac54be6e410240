//! Operational router

use crate::dispatch::Command;
use crate::machine::StateMachine;
use crate::types::{Event, OperationalMode};

pub(super) fn handle(machine: &mut StateMachine, event: Event) -> Vec<Command> {
    match event {
        Event::EnterList => machine.request_mode_transition(OperationalMode::List, None),
        Event::EnterDetail { id } => {
            machine.request_mode_transition(OperationalMode::Detail, Some(&id))
        }
        Event::EnterCreate => machine.request_mode_transition(OperationalMode::Create, None),
        Event::EnterEdit { id } => machine.request_mode_transition(OperationalMode::Edit, Some(&id)),
        Event::EnterDeleteConfirm { id } => {
            machine.request_mode_transition(OperationalMode::DeleteConfirm, Some(&id))
        }
        Event::RecordsLoaded { ids } => {
            log::debug!("{} record(s) loaded", ids.len());
            machine.set_record_ids(ids);
            Vec::new()
        }
        Event::RecordCreated { error } => match error {
            None => {
                machine.set_status("Record created successfully");
                vec![Command::emit("return to list", Event::EnterList)]
            }
            Some(err) => {
                machine.set_status(format!("Error creating record: {err}"));
                Vec::new()
            }
        },
        Event::RecordUpdated { id, error } => match error {
            None => {
                machine.set_status("Record updated successfully");
                vec![Command::emit("return to detail", Event::EnterDetail { id })]
            }
            Some(err) => {
                machine.set_status(format!("Error updating record: {err}"));
                Vec::new()
            }
        },
        Event::RecordDeleted { id, error } => match error {
            None => {
                // leave DeleteConfirm before its record goes away
                let commands = machine.request_mode_transition(OperationalMode::List, None);
                machine.forget_record(&id);
                machine.set_status("Record deleted successfully");
                commands
            }
            Some(err) => {
                machine.set_status(format!("Error deleting record: {err}"));
                Vec::new()
            }
        },
        Event::Status { text } => {
            machine.set_status(text);
            Vec::new()
        }
        Event::Error { context, message } => {
            machine.set_status(super::error_status(&context, &message));
            Vec::new()
        }
        Event::Quit => super::quit(machine),

        Event::PrefixChosen { .. }
        | Event::CustomPrefixEntered { .. }
        | Event::PrefixConfirmed { .. }
        | Event::StoreWriteCompleted { .. }
        | Event::StateChanged { .. }
        | Event::PromptRequested(_) => {
            log::debug!("operational ignores {}", event.kind());
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_utils::MockBucketStore;
    use crate::types::{PrimaryState, Prompt};

    fn operational() -> StateMachine {
        let mut machine = StateMachine::new(Some(Arc::new(MockBucketStore::new())));
        machine
            .request_transition(PrimaryState::Operational)
            .unwrap();
        machine
    }

    #[test]
    fn created_record_returns_to_list() {
        let mut machine = operational();
        handle(&mut machine, Event::EnterCreate);
        assert_eq!(machine.mode(), Some(OperationalMode::Create));

        let commands = handle(&mut machine, Event::RecordCreated { error: None });
        assert_eq!(machine.status(), "Record created successfully");
        assert_eq!(commands[0].ready_event(), Some(&Event::EnterList));
    }

    #[test]
    fn failed_create_only_sets_status() {
        let mut machine = operational();
        handle(&mut machine, Event::EnterCreate);
        let commands = handle(
            &mut machine,
            Event::RecordCreated {
                error: Some("duplicate".into()),
            },
        );
        assert!(commands.is_empty());
        assert_eq!(machine.status(), "Error creating record: duplicate");
        assert_eq!(machine.mode(), Some(OperationalMode::Create));
    }

    #[test]
    fn updated_record_returns_to_detail() {
        let mut machine = operational();
        handle(&mut machine, Event::EnterEdit { id: "r-7".into() });
        let commands = handle(
            &mut machine,
            Event::RecordUpdated {
                id: "r-7".into(),
                error: None,
            },
        );
        assert_eq!(machine.status(), "Record updated successfully");
        assert_eq!(
            commands[0].ready_event(),
            Some(&Event::EnterDetail { id: "r-7".into() })
        );
    }

    #[test]
    fn deleted_record_is_forgotten() {
        let mut machine = operational();
        handle(
            &mut machine,
            Event::RecordsLoaded {
                ids: vec!["a".into(), "b".into()],
            },
        );
        let commands = handle(&mut machine, Event::EnterDeleteConfirm { id: "a".into() });
        assert_eq!(
            commands[0].ready_event(),
            Some(&Event::PromptRequested(Prompt::ConfirmDelete { id: "a".into() }))
        );

        let commands = handle(
            &mut machine,
            Event::RecordDeleted {
                id: "a".into(),
                error: None,
            },
        );
        assert_eq!(machine.mode(), Some(OperationalMode::List));
        assert_eq!(machine.record_ids(), ["b".to_string()]);
        assert_eq!(machine.selected_record(), None);
        assert_eq!(machine.status(), "Record deleted successfully");
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].label(), "load record list");
    }

    #[test]
    fn record_modes_always_have_a_selection() {
        let mut machine = operational();
        let focused = |machine: &StateMachine| {
            let snapshot = machine.snapshot();
            let needs_record = snapshot.mode.is_some_and(OperationalMode::requires_record);
            !needs_record || snapshot.selected_record.as_deref().is_some_and(|id| !id.is_empty())
        };

        let events = [
            Event::RecordsLoaded {
                ids: vec!["a".into()],
            },
            Event::EnterDetail { id: "a".into() },
            Event::EnterDeleteConfirm { id: "a".into() },
            Event::RecordDeleted {
                id: "a".into(),
                error: None,
            },
            Event::EnterDetail { id: String::new() },
            Event::EnterEdit { id: String::new() },
        ];
        for event in events {
            let kind = event.kind();
            handle(&mut machine, event);
            assert!(focused(&machine), "after {kind}: {:?}", machine.snapshot());
        }
        assert_eq!(machine.mode(), Some(OperationalMode::List));
    }

    #[test]
    fn failed_delete_keeps_confirmation() {
        let mut machine = operational();
        handle(&mut machine, Event::EnterDeleteConfirm { id: "a".into() });
        let commands = handle(
            &mut machine,
            Event::RecordDeleted {
                id: "a".into(),
                error: Some("locked".into()),
            },
        );
        assert!(commands.is_empty());
        assert_eq!(machine.mode(), Some(OperationalMode::DeleteConfirm));
        assert_eq!(machine.selected_record(), Some("a"));
        assert_eq!(machine.status(), "Error deleting record: locked");
    }

    #[test]
    fn records_loaded_keeps_status() {
        let mut machine = operational();
        machine.set_status("Record created successfully");
        handle(
            &mut machine,
            Event::RecordsLoaded {
                ids: vec!["x".into()],
            },
        );
        assert_eq!(machine.status(), "Record created successfully");
        assert_eq!(machine.record_ids(), ["x".to_string()]);
    }

    #[test]
    fn error_event_formats_context() {
        let mut machine = operational();
        handle(
            &mut machine,
            Event::Error {
                context: "load".into(),
                message: "boom".into(),
            },
        );
        assert_eq!(machine.status(), "Error [load]: boom");
    }

    #[test]
    fn onboarding_input_is_ignored() {
        let mut machine = operational();
        let commands = handle(
            &mut machine,
            Event::PrefixChosen {
                prefix: "10.0.0.0/8".into(),
                is_custom: false,
            },
        );
        assert!(commands.is_empty());
        assert_eq!(machine.onboarding(), None);
        assert_eq!(machine.pending_prefix(), None);
    }
}
