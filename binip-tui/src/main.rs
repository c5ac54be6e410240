//! binip TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置服务 (`backend/`)
//!
//! 会话状态本身（引导流程、记录模式）由 `binip-core` 的状态机持有，
//! TUI 只负责把按键翻译成事件、把事件交给调度器。
//!
//!
//! main.rs
//! binip 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()              // 解析命令行
//!     LocalConfigService.load() // 读取配置并应用命令行覆盖项
//!     init_debug_log()          // --debug 时写入调试日志
//!     commands::*()             // 执行子命令，默认为交互式会话
//!
//! }

mod app;
mod backend;
mod commands;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use backend::{ConfigService, LocalConfigService};
use util::init_debug_log;

#[derive(Debug, Parser)]
#[command(name = "binip", version, about = "Manage IP records of a private network")]
struct Cli {
    /// 写入调试日志
    #[arg(long, global = true)]
    debug: bool,

    /// 数据库文件
    #[arg(long = "db", value_name = "PATH", global = true)]
    db_file: Option<PathBuf>,

    /// 调试日志文件
    #[arg(long, value_name = "PATH", global = true)]
    debug_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Command {
    /// 启动交互式会话（默认）
    App,
    /// 打印系统信息和数据库内容
    Info,
    /// 在内存存储上自检，不写数据库
    Test,
    /// 清空所有记录，保留网络前缀
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. 加载配置
    let mut config = LocalConfigService::new().load()?;
    config.apply_overrides(cli.debug, cli.db_file, cli.debug_file);

    // 2. 调试日志
    init_debug_log(&config)?;
    log::debug!("starting with {config:?}");

    // 3. 异步运行时（存储与调度器共用）
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("cannot start async runtime")?;

    // 4. 执行子命令
    match cli.command.unwrap_or(Command::App) {
        Command::App => commands::app(&runtime, &config),
        Command::Info => commands::info(&runtime, &config),
        Command::Test => commands::test(&runtime, &config),
        Command::Reset => commands::reset(&runtime, &config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_app() {
        let cli = Cli::parse_from(["binip"]);
        assert_eq!(cli.command, None);
        assert!(!cli.debug);
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::parse_from(["binip", "info", "--debug", "--db", "/tmp/x.json"]);
        assert_eq!(cli.command, Some(Command::Info));
        assert!(cli.debug);
        assert_eq!(cli.db_file, Some(PathBuf::from("/tmp/x.json")));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
