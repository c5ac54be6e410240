//! 记录视图消息类型

/// 运行态（无表单时）的消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationalMessage {
    SelectPrevious,
    SelectNext,
    /// 打开光标所在记录
    OpenDetail,
    Create,
    Edit,
    Delete,
    BackToList,
}
