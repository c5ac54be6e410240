//! Onboarding router

use crate::dispatch::Command;
use crate::error::TransitionError;
use crate::machine::StateMachine;
use crate::types::{Event, OnboardingSubState, PrimaryState};

pub(super) fn handle(machine: &mut StateMachine, event: Event) -> Vec<Command> {
    match event {
        Event::PrefixChosen { prefix, is_custom } => {
            if is_custom {
                step(machine, OnboardingSubState::EnteringCustomPrefix, "")
            } else {
                step(machine, OnboardingSubState::ConfirmingPrefix, &prefix)
            }
        }
        Event::CustomPrefixEntered { prefix, valid } => {
            if valid {
                step(machine, OnboardingSubState::ConfirmingPrefix, &prefix)
            } else {
                log::debug!("invalid custom prefix ignored: {prefix:?}");
                Vec::new()
            }
        }
        Event::PrefixConfirmed { confirmed, prefix } => {
            if confirmed {
                step(machine, OnboardingSubState::SavingToStore, &prefix)
            } else {
                step(machine, OnboardingSubState::SelectingPrefix, "")
            }
        }
        Event::StoreWriteCompleted { prefix, error } => {
            store_write_completed(machine, &prefix, error)
        }
        Event::Status { text } => {
            machine.set_status(text);
            Vec::new()
        }
        Event::Error { context, message } => {
            machine.set_status(super::error_status(&context, &message));
            Vec::new()
        }
        Event::Quit => super::quit(machine),

        // operational input has no meaning before the prefix is saved
        Event::EnterList
        | Event::EnterDetail { .. }
        | Event::EnterCreate
        | Event::EnterEdit { .. }
        | Event::EnterDeleteConfirm { .. }
        | Event::RecordsLoaded { .. }
        | Event::RecordCreated { .. }
        | Event::RecordUpdated { .. }
        | Event::RecordDeleted { .. }
        | Event::StateChanged { .. }
        | Event::PromptRequested(_) => {
            log::debug!("onboarding ignores {}", event.kind());
            Vec::new()
        }
    }
}

fn store_write_completed(
    machine: &mut StateMachine,
    prefix: &str,
    error: Option<String>,
) -> Vec<Command> {
    if machine.onboarding() != Some(OnboardingSubState::SavingToStore) {
        log::debug!("stale store write result for {prefix} ignored");
        return Vec::new();
    }

    match error {
        None => {
            log::info!("network prefix saved: {prefix}");
            match machine.request_transition(PrimaryState::Operational) {
                Ok(commands) => commands,
                Err(e) => recover(machine, &e),
            }
        }
        Some(err) => {
            machine.set_status(format!("Error saving to database: {err}"));
            back_to_selection(machine)
        }
    }
}

/// Apply a sub-transition, rolling back to the selection on failure
fn step(machine: &mut StateMachine, target: OnboardingSubState, prefix: &str) -> Vec<Command> {
    match machine.request_sub_transition(target, prefix) {
        Ok(commands) => commands,
        Err(e) => recover(machine, &e),
    }
}

fn recover(machine: &mut StateMachine, error: &TransitionError) -> Vec<Command> {
    log::warn!("onboarding transition rejected: {error}");
    machine.set_status(super::error_status("onboarding transition", &error.to_string()));
    back_to_selection(machine)
}

fn back_to_selection(machine: &mut StateMachine) -> Vec<Command> {
    machine
        .request_sub_transition(OnboardingSubState::SelectingPrefix, "")
        .unwrap_or_else(|e| {
            log::error!("cannot return to prefix selection: {e}");
            Vec::new()
        })
}
