//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入转换为 AppMessage。
//!
//!     · poll_event      事件轮询，受 app.rs 调用，最长等待 timeout
//!     · handle_event    事件分发：
//!         - 有表单时，按表单类型处理（文本输入时字符键不作快捷键）
//!         - 全局快捷键（Ctrl+C / q / ?）
//!         - 运行态无表单时，处理记录视图快捷键

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
