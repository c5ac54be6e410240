//! 状态枚举定义

use std::fmt;

use serde::Serialize;

/// 会话主状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryState {
    /// 引导流程：选择并保存网段
    Onboarding,
    /// 引导完成后的记录管理
    Operational,
    /// 终止状态，没有任何出边
    Quitting,
}

impl PrimaryState {
    pub fn name(self) -> &'static str {
        match self {
            Self::Onboarding => "onboarding",
            Self::Operational => "operational",
            Self::Quitting => "quitting",
        }
    }
}

/// 引导流程子状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingSubState {
    /// 从预设网段中选择
    SelectingPrefix,
    /// 手动输入 CIDR
    EnteringCustomPrefix,
    /// 确认待定网段
    ConfirmingPrefix,
    /// 正在写入存储
    SavingToStore,
}

impl OnboardingSubState {
    pub fn name(self) -> &'static str {
        match self {
            Self::SelectingPrefix => "selecting prefix",
            Self::EnteringCustomPrefix => "entering custom prefix",
            Self::ConfirmingPrefix => "confirming prefix",
            Self::SavingToStore => "saving to store",
        }
    }

    /// 该子状态是否必须持有待定网段
    pub fn requires_prefix(self) -> bool {
        matches!(self, Self::ConfirmingPrefix | Self::SavingToStore)
    }
}

/// 运行态下的视图模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationalMode {
    List,
    Detail,
    Create,
    Edit,
    DeleteConfirm,
}

impl OperationalMode {
    pub fn name(self) -> &'static str {
        match self {
            Self::List => "list view",
            Self::Detail => "detail view",
            Self::Create => "create view",
            Self::Edit => "edit view",
            Self::DeleteConfirm => "delete confirm view",
        }
    }

    /// 该模式是否必须聚焦某条记录
    pub fn requires_record(self) -> bool {
        matches!(self, Self::Detail | Self::Edit | Self::DeleteConfirm)
    }
}

/// `StateChanged` 通知中的状态标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StateId {
    Primary(PrimaryState),
    Onboarding(OnboardingSubState),
}

impl fmt::Display for PrimaryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for OnboardingSubState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for OperationalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary(s) => write!(f, "{s}"),
            Self::Onboarding(s) => write!(f, "onboarding/{s}"),
        }
    }
}
