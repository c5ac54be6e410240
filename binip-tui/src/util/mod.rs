//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//!     · terminal.rs   终端的初始化和恢复（Raw Mode + 备用屏幕）
//!     · logging.rs    `--debug` 时把日志写入调试文件
//!
//! 注意：无论 app::run 成功与否，main 都必须先调用 restore_terminal，
//!       再返回错误结果，否则终端会停留在原始模式。

mod logging;
mod terminal;

pub use logging::init_debug_log;
pub use terminal::{init_terminal, restore_terminal, Term};
