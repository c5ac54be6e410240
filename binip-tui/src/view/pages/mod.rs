//! 页面

pub mod onboarding;
pub mod records;
