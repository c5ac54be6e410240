//! Deferred work units

use std::fmt;
use std::future::Future;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::types::Event;

pub(super) enum Work {
    /// Result is already known; delivered in scheduling order
    Ready(Event),
    /// Runs on the runtime and may yield one follow-up event
    Deferred(BoxFuture<'static, Option<Event>>),
}

/// A unit of deferred work producing at most one follow-up event.
///
/// Commands are consumed when scheduled, so each one runs at most once.
pub struct Command {
    label: &'static str,
    pub(super) work: Work,
}

impl Command {
    /// Command whose follow-up event is known up front
    pub fn emit(label: &'static str, event: Event) -> Self {
        Self {
            label,
            work: Work::Ready(event),
        }
    }

    /// Command backed by asynchronous work
    pub fn task<F>(label: &'static str, future: F) -> Self
    where
        F: Future<Output = Option<Event>> + Send + 'static,
    {
        Self {
            label,
            work: Work::Deferred(future.boxed()),
        }
    }

    /// Short description for the debug trace
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Whether the command needs the runtime to complete
    pub fn is_deferred(&self) -> bool {
        matches!(self.work, Work::Deferred(_))
    }

    /// Follow-up event of an immediate command
    pub fn ready_event(&self) -> Option<&Event> {
        match &self.work {
            Work::Ready(event) => Some(event),
            Work::Deferred(_) => None,
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Command");
        s.field("label", &self.label);
        match &self.work {
            Work::Ready(event) => s.field("event", event),
            Work::Deferred(_) => s.field("event", &"<deferred>"),
        };
        s.finish()
    }
}
