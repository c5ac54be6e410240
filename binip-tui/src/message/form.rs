//! 表单消息类型

/// 表单相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// 上一个选项
    Previous,

    /// 下一个选项
    Next,

    /// 切换是 / 否
    Toggle,

    /// 直接回答是 / 否
    Answer(bool),

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 确认/提交
    Submit,

    /// 放弃表单
    Cancel,
}
