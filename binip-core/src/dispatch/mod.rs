//! Command dispatcher
//!
//! Every event the session reacts to travels through one unbounded queue:
//! external input posted by the frontend, follow-up events of immediate
//! commands and results of deferred commands running on the tokio runtime.
//! The owner drains the queue one event at a time, so state is only ever
//! mutated from a single place even when command work runs in parallel.

mod command;

pub use command::Command;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::{JoinError, JoinSet};

use crate::types::Event;
use command::Work;

/// Schedules commands and hands their results back in arrival order
pub struct Dispatcher {
    handle: Handle,
    tx: UnboundedSender<Event>,
    rx: UnboundedReceiver<Event>,
    tasks: JoinSet<()>,
}

impl Dispatcher {
    /// Create a dispatcher spawning deferred work onto `handle`
    pub fn new(handle: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            tx,
            rx,
            tasks: JoinSet::new(),
        }
    }

    /// Create a dispatcher on the runtime of the calling task
    ///
    /// # Panics
    /// Outside of a tokio runtime context.
    pub fn current() -> Self {
        Self::new(Handle::current())
    }

    /// Append external input to the queue
    pub fn post(&self, event: Event) {
        // the receiver lives in `self`, so sending cannot fail
        let _ = self.tx.send(event);
    }

    /// Schedule one command without waiting for it
    pub fn schedule(&mut self, command: Command) {
        let label = command.label();
        match command.work {
            Work::Ready(event) => {
                log::debug!("command `{label}` ready: {}", event.kind());
                self.post(event);
            }
            Work::Deferred(future) => {
                log::debug!("command `{label}` spawned");
                let tx = self.tx.clone();
                self.tasks.spawn_on(
                    async move {
                        if let Some(event) = future.await {
                            log::debug!("command `{label}` completed: {}", event.kind());
                            let _ = tx.send(event);
                        } else {
                            log::debug!("command `{label}` completed without event");
                        }
                    },
                    &self.handle,
                );
            }
        }
    }

    /// Schedule every command in order
    pub fn schedule_all(&mut self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.schedule(command);
        }
    }

    /// Next queued event, without waiting
    pub fn try_next(&mut self) -> Option<Event> {
        self.reap();
        self.rx.try_recv().ok()
    }

    /// Next event, waiting for in-flight commands when the queue is empty.
    ///
    /// Returns `None` once the queue is empty and no work is pending.
    pub async fn next(&mut self) -> Option<Event> {
        loop {
            if let Ok(event) = self.rx.try_recv() {
                return Some(event);
            }
            match self.tasks.join_next().await {
                Some(result) => log_join(result),
                None => return self.rx.try_recv().ok(),
            }
        }
    }

    /// Wait until every scheduled command has finished
    pub async fn settle(&mut self) {
        while let Some(result) = self.tasks.join_next().await {
            log_join(result);
        }
    }

    /// Number of deferred commands still running
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    fn reap(&mut self) {
        while let Some(result) = self.tasks.try_join_next() {
            log_join(result);
        }
    }
}

fn log_join(result: Result<(), JoinError>) {
    if let Err(e) = result {
        log::error!("command task failed: {e}");
    }
}
