//! 渲染快照

use serde::Serialize;

use super::{OnboardingSubState, OperationalMode, PrimaryState};

/// 每轮事件处理后供渲染层读取的只读快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub primary: PrimaryState,
    pub onboarding: Option<OnboardingSubState>,
    pub mode: Option<OperationalMode>,
    pub pending_prefix: Option<String>,
    pub selected_record: Option<String>,
    pub record_ids: Vec<String>,
    pub status: String,
}
