//!
//! src/message/mod.rs
//! Message 层：界面消息
//!
//! Event 层把按键翻译成 AppMessage，Update 层消费它；
//! 需要改变会话状态时，Update 层再产出核心库的 `Event` 投递给调度器。

mod app;
mod form;
mod operational;

pub use app::AppMessage;
pub use form::FormMessage;
pub use operational::OperationalMessage;
