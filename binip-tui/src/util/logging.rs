//! 调试日志
//!
//! 只有 `--debug`（或配置 `debug: true`）时才安装订阅者：备用屏幕激活期间
//! 不能向 stdout/stderr 写任何内容。`log` 宏的记录经 `tracing-log` 桥接到
//! 同一个订阅者。

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::AppConfig;

/// 按配置初始化调试日志；未开启调试时什么也不做
pub fn init_debug_log(config: &AppConfig) -> Result<()> {
    if !config.debug {
        return Ok(());
    }

    if let Some(parent) = config.debug_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;
    }
    let file = File::create(&config.debug_file)
        .with_context(|| format!("cannot open debug file {}", config.debug_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .try_init()
        .context("cannot install debug logger")?;

    tracing::info!("debug trace started: {}", config.debug_file.display());
    Ok(())
}
