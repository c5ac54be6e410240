//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model（状态机快照 + 当前表单），从不修改状态。
//!     layout.rs       标题栏 + 主体 + 底部帮助
//!     pages/          引导页、记录页
//!     components/     表单、底部帮助栏
//!     theme.rs        颜色和样式

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
