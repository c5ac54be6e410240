//! 事件定义
//!
//! 所有输入（按键翻译结果、表单完成、后台命令结果、状态通知）都汇入同一个
//! `Event` 枚举，由路由按 (主状态, 事件变体) 穷尽匹配。

use super::StateId;

/// 前端需要展示的表单
///
/// 表单本身（选中项、输入缓冲区等临时字段）归前端所有，
/// 离开请求它的子状态或模式后即被丢弃，从不持久化。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// 预设网段单选（最后一项为自定义）
    SelectPrefix { options: Vec<String> },
    /// 带 CIDR 校验的自由输入
    CustomPrefix,
    /// 是 / 否确认待定网段
    ConfirmPrefix { prefix: String },
    /// 新建记录
    CreateRecord,
    /// 编辑记录
    EditRecord { id: String },
    /// 确认删除记录
    ConfirmDelete { id: String },
}

/// 会话事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // === 通知（只读，不改变状态） ===
    /// 主状态或子状态发生了变化
    StateChanged { from: StateId, to: StateId },

    /// 进入状态后需要展示表单
    PromptRequested(Prompt),

    // === 引导流程 ===
    /// 在选择表单中选定了网段
    PrefixChosen { prefix: String, is_custom: bool },

    /// 自定义网段输入完成
    CustomPrefixEntered { prefix: String, valid: bool },

    /// 用户确认或拒绝待定网段
    PrefixConfirmed { confirmed: bool, prefix: String },

    /// 网段写入存储完成，`error` 为 `None` 表示成功
    StoreWriteCompleted {
        prefix: String,
        error: Option<String>,
    },

    // === 运行态 ===
    EnterList,
    EnterDetail { id: String },
    EnterCreate,
    EnterEdit { id: String },
    EnterDeleteConfirm { id: String },

    /// 记录列表加载完成
    RecordsLoaded { ids: Vec<String> },

    RecordCreated { error: Option<String> },
    RecordUpdated { id: String, error: Option<String> },
    RecordDeleted { id: String, error: Option<String> },

    // === 全局 ===
    /// 原样显示的状态消息
    Status { text: String },

    /// 带上下文的错误
    Error { context: String, message: String },

    /// 退出会话
    Quit,
}

impl Event {
    /// 便于调试日志的事件名
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StateChanged { .. } => "state_changed",
            Self::PromptRequested(_) => "prompt_requested",
            Self::PrefixChosen { .. } => "prefix_chosen",
            Self::CustomPrefixEntered { .. } => "custom_prefix_entered",
            Self::PrefixConfirmed { .. } => "prefix_confirmed",
            Self::StoreWriteCompleted { .. } => "store_write_completed",
            Self::EnterList => "enter_list",
            Self::EnterDetail { .. } => "enter_detail",
            Self::EnterCreate => "enter_create",
            Self::EnterEdit { .. } => "enter_edit",
            Self::EnterDeleteConfirm { .. } => "enter_delete_confirm",
            Self::RecordsLoaded { .. } => "records_loaded",
            Self::RecordCreated { .. } => "record_created",
            Self::RecordUpdated { .. } => "record_updated",
            Self::RecordDeleted { .. } => "record_deleted",
            Self::Status { .. } => "status",
            Self::Error { .. } => "error",
            Self::Quit => "quit",
        }
    }
}
