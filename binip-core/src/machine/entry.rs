//! Entry actions fired when a state, sub-state or mode becomes active

use std::sync::Arc;

use crate::dispatch::Command;
use crate::traits::{BucketStore, NETWORK_PREFIX_KEY, RECORDS_BUCKET, SYSTEM_BUCKET};
use crate::types::{Event, Prompt};
use crate::utils::cidr::prefix_options;

pub(super) fn selection_prompt() -> Command {
    Command::emit(
        "prepare selection prompt",
        Event::PromptRequested(Prompt::SelectPrefix {
            options: prefix_options(),
        }),
    )
}

pub(super) fn custom_prefix_prompt() -> Command {
    Command::emit(
        "prepare custom prefix prompt",
        Event::PromptRequested(Prompt::CustomPrefix),
    )
}

pub(super) fn confirm_prompt(prefix: &str) -> Command {
    Command::emit(
        "prepare confirmation prompt",
        Event::PromptRequested(Prompt::ConfirmPrefix {
            prefix: prefix.to_string(),
        }),
    )
}

/// Persist the confirmed prefix under `system.network_prefix`
pub(super) fn save_prefix(store: Option<Arc<dyn BucketStore>>, prefix: String) -> Command {
    let Some(store) = store else {
        return Command::emit(
            "save network prefix",
            Event::StoreWriteCompleted {
                prefix,
                error: Some("no persistence backend attached".to_string()),
            },
        );
    };

    Command::task("save network prefix", async move {
        let error = store
            .put(SYSTEM_BUCKET, NETWORK_PREFIX_KEY, prefix.as_bytes())
            .await
            .err()
            .map(|e| {
                if e.is_expected() {
                    log::warn!("saving network prefix failed: {e}");
                } else {
                    log::error!("saving network prefix failed: {e}");
                }
                e.to_string()
            });
        Some(Event::StoreWriteCompleted { prefix, error })
    })
}

/// First action after onboarding completes
pub(super) fn load_operational_data() -> Command {
    Command::emit("load initial data", Event::EnterList)
}

/// List the keys of the records partition
pub(super) fn load_record_list(store: Option<Arc<dyn BucketStore>>) -> Command {
    let Some(store) = store else {
        return Command::emit("load record list", Event::RecordsLoaded { ids: Vec::new() });
    };

    Command::task("load record list", async move {
        let dump = store.dump_all().await;
        let ids = dump
            .get(RECORDS_BUCKET)
            .map(|entries| {
                entries
                    .iter()
                    .map(|(key, _)| String::from_utf8_lossy(key).into_owned())
                    .collect()
            })
            .unwrap_or_default();
        Some(Event::RecordsLoaded { ids })
    })
}

pub(super) fn load_record_detail(id: &str) -> Command {
    Command::emit(
        "load record detail",
        Event::Status {
            text: format!("Record detail loaded: {id}"),
        },
    )
}

pub(super) fn record_prompt(prompt: Prompt) -> Command {
    Command::emit("prepare record form", Event::PromptRequested(prompt))
}
