//! 应用主消息枚举

use super::{FormMessage, OperationalMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 展开 / 收起完整帮助
    ToggleHelp,

    /// 表单相关消息
    Form(FormMessage),

    /// 运行态记录视图相关消息
    Operational(OperationalMessage),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
