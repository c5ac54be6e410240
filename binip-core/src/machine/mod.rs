//! Session state machine
//!
//! Owns the primary state, the onboarding sub-state, the operational mode and
//! the data that goes with them. Transitions are validated first, then
//! applied, then answered with the entry commands of the new state plus a
//! `StateChanged` notification for observers.

mod entry;
pub mod validation;

use std::sync::Arc;

use crate::dispatch::Command;
use crate::error::TransitionError;
use crate::traits::BucketStore;
use crate::types::{
    Event, OnboardingSubState, OperationalMode, PrimaryState, Prompt, Snapshot, StateId,
};

/// The single session object driven by the event loop
pub struct StateMachine {
    primary: PrimaryState,
    onboarding: Option<OnboardingSubState>,
    mode: Option<OperationalMode>,
    pending_prefix: Option<String>,
    selected_record: Option<String>,
    record_ids: Vec<String>,
    status: String,
    store: Option<Arc<dyn BucketStore>>,
}

impl StateMachine {
    /// New session in `Onboarding / SelectingPrefix`.
    ///
    /// Call [`StateMachine::start`] to obtain the entry commands of that state.
    pub fn new(store: Option<Arc<dyn BucketStore>>) -> Self {
        Self {
            primary: PrimaryState::Onboarding,
            onboarding: Some(OnboardingSubState::SelectingPrefix),
            mode: None,
            pending_prefix: None,
            selected_record: None,
            record_ids: Vec::new(),
            status: String::new(),
            store,
        }
    }

    /// Entry commands of the initial state
    pub fn start(&self) -> Vec<Command> {
        vec![entry::selection_prompt()]
    }

    pub fn primary(&self) -> PrimaryState {
        self.primary
    }

    pub fn onboarding(&self) -> Option<OnboardingSubState> {
        self.onboarding
    }

    pub fn mode(&self) -> Option<OperationalMode> {
        self.mode
    }

    pub fn pending_prefix(&self) -> Option<&str> {
        self.pending_prefix.as_deref()
    }

    pub fn selected_record(&self) -> Option<&str> {
        self.selected_record.as_deref()
    }

    pub fn record_ids(&self) -> &[String] {
        &self.record_ids
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    pub fn is_quitting(&self) -> bool {
        self.primary == PrimaryState::Quitting
    }

    /// Replace the status line
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
    }

    pub(crate) fn set_record_ids(&mut self, ids: Vec<String>) {
        self.record_ids = ids;
    }

    /// Drop every reference to a deleted record
    pub(crate) fn forget_record(&mut self, id: &str) {
        self.record_ids.retain(|r| r != id);
        if self.selected_record.as_deref() == Some(id) {
            self.selected_record = None;
        }
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            primary: self.primary,
            onboarding: self.onboarding,
            mode: self.mode,
            pending_prefix: self.pending_prefix.clone(),
            selected_record: self.selected_record.clone(),
            record_ids: self.record_ids.clone(),
            status: self.status.clone(),
        }
    }

    /// Move to another primary state
    pub fn request_transition(
        &mut self,
        target: PrimaryState,
    ) -> Result<Vec<Command>, TransitionError> {
        validation::primary(self.primary, target, self.has_store())?;

        let from = self.primary;
        self.primary = target;
        log::debug!("primary transition: {from} -> {target}");

        let mut commands = vec![Command::emit(
            "state transition",
            Event::StateChanged {
                from: StateId::Primary(from),
                to: StateId::Primary(target),
            },
        )];

        match target {
            PrimaryState::Onboarding => {
                self.mode = None;
                self.onboarding = Some(OnboardingSubState::SelectingPrefix);
                self.pending_prefix = None;
                commands.push(entry::selection_prompt());
            }
            PrimaryState::Operational => {
                self.onboarding = None;
                self.pending_prefix = None;
                self.mode = Some(OperationalMode::List);
                commands.push(entry::load_operational_data());
            }
            PrimaryState::Quitting => {
                self.onboarding = None;
                self.pending_prefix = None;
                self.mode = None;
            }
        }

        Ok(commands)
    }

    /// Move to another onboarding step; `prefix` is the candidate it operates on
    pub fn request_sub_transition(
        &mut self,
        target: OnboardingSubState,
        prefix: &str,
    ) -> Result<Vec<Command>, TransitionError> {
        if self.primary != PrimaryState::Onboarding {
            return Err(if self.is_quitting() {
                TransitionError::Terminal
            } else {
                TransitionError::NotOnboarding
            });
        }
        validation::onboarding_sub(target, prefix)?;

        let from = self.onboarding.replace(target);
        log::debug!(
            "onboarding transition: {} -> {target}",
            from.map_or("none", OnboardingSubState::name)
        );

        let mut commands = Vec::with_capacity(2);
        if let Some(from) = from {
            commands.push(Command::emit(
                "state transition",
                Event::StateChanged {
                    from: StateId::Onboarding(from),
                    to: StateId::Onboarding(target),
                },
            ));
        }

        let entry = match target {
            OnboardingSubState::SelectingPrefix => {
                self.pending_prefix = None;
                entry::selection_prompt()
            }
            OnboardingSubState::EnteringCustomPrefix => {
                self.pending_prefix = None;
                entry::custom_prefix_prompt()
            }
            OnboardingSubState::ConfirmingPrefix => {
                self.pending_prefix = Some(prefix.to_string());
                entry::confirm_prompt(prefix)
            }
            OnboardingSubState::SavingToStore => {
                self.pending_prefix = Some(prefix.to_string());
                entry::save_prefix(self.store.clone(), prefix.to_string())
            }
        };
        commands.push(entry);

        Ok(commands)
    }

    /// Switch the operational view.
    ///
    /// `record_id` focuses a record for Detail/Edit/DeleteConfirm; `None`
    /// keeps the current focus. Without a usable record the mode stays as is.
    pub fn request_mode_transition(
        &mut self,
        target: OperationalMode,
        record_id: Option<&str>,
    ) -> Vec<Command> {
        if self.primary != PrimaryState::Operational {
            log::debug!("mode transition to {target} ignored in {}", self.primary);
            return Vec::new();
        }

        if target.requires_record() {
            let id = match record_id {
                Some(id) => id,
                None => self.selected_record.as_deref().unwrap_or_default(),
            };
            if id.is_empty() {
                log::debug!("mode transition to {target} ignored: no record selected");
                return Vec::new();
            }
            self.selected_record = Some(id.to_string());
        }

        self.mode = Some(target);
        log::debug!("mode transition: {target}");

        let id = self.selected_record.clone().unwrap_or_default();
        let entry = match target {
            OperationalMode::List => entry::load_record_list(self.store.clone()),
            OperationalMode::Detail => entry::load_record_detail(&id),
            OperationalMode::Create => entry::record_prompt(Prompt::CreateRecord),
            OperationalMode::Edit => entry::record_prompt(Prompt::EditRecord { id }),
            OperationalMode::DeleteConfirm => entry::record_prompt(Prompt::ConfirmDelete { id }),
        };
        vec![entry]
    }
}
