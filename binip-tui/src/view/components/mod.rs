//! 可复用组件

pub mod footer;
pub mod form;
