//! 类型定义模块

mod event;
mod snapshot;
mod state;

pub use event::{Event, Prompt};
pub use snapshot::Snapshot;
pub use state::{OnboardingSubState, OperationalMode, PrimaryState, StateId};
