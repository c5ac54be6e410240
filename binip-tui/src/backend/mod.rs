//! Backend 层：配置加载

mod config_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
