//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//!     App     主状态：持有会话状态机、当前表单和界面状态
//!     Form    由 PromptRequested 创建的表单，归属于当时的子状态 / 模式
//!
//! 会话状态只由状态机修改；Model 层只保存界面相关的临时字段。

mod app;
mod form;

pub use app::App;
pub use form::{Form, FormKind, FormOwner};
