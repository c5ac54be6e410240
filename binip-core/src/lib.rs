//! binip core library
//!
//! Session logic of the binip network-prefix manager:
//! - onboarding / operational state machine with validated transitions
//! - event router matching on (primary state, event variant)
//! - command dispatcher delivering deferred results back as events
//! - persistence port for the bucketed key/value store
//!
//! Platform-independent: the storage backend and the frontend are plugged in
//! by the application crates.

pub mod dispatch;
pub mod error;
pub mod machine;
pub mod router;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use dispatch::{Command, Dispatcher};
pub use error::{StoreError, StoreResult, TransitionError};
pub use machine::StateMachine;
pub use traits::BucketStore;
pub use types::{Event, OnboardingSubState, OperationalMode, PrimaryState, Prompt, Snapshot};
