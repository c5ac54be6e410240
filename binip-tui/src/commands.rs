//! 子命令实现

use std::sync::Arc;

use anyhow::{Context, Result};
use binip_app::Store;
use binip_core::Dispatcher;
use tokio::runtime::Runtime;

use crate::backend::AppConfig;
use crate::model::App;
use crate::util::{init_terminal, restore_terminal};

/// 交互式会话
pub fn app(runtime: &Runtime, config: &AppConfig) -> Result<()> {
    // 存储打开失败时在初始化终端之前退出
    let store = Arc::new(open_store(runtime, config)?);

    let mut dispatcher = Dispatcher::new(runtime.handle().clone());
    let mut app = App::new(store, config.debug);

    // 1. 初始化终端
    let mut terminal = init_terminal()?;

    // 2. 运行主循环
    let result = crate::app::run(&mut terminal, &mut app, &mut dispatcher);

    // 3. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 4. 等待已调度的命令完成
    runtime.block_on(dispatcher.settle());
    log::info!("session ended in {}", app.machine.primary());

    result
}

/// 系统信息和存储内容
pub fn info(runtime: &Runtime, config: &AppConfig) -> Result<()> {
    let cpus = std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);

    println!("System info");
    println!("\tNum Logical CPU: {cpus}");
    println!("\tOperating System: {}", std::env::consts::OS);
    println!("\tArchitecture: {}", std::env::consts::ARCH);
    println!("\tDebug: {}", config.debug);
    println!("\tDebug File: {}", config.debug_file.display());
    println!("\tDatabase: {}", config.db_file.display());
    println!();

    let store = open_store(runtime, config)?;
    print!("{}", runtime.block_on(store.render_dump()));
    Ok(())
}

/// 测试模式：只在内存存储上完成引导，不触碰数据库文件
pub fn test(runtime: &Runtime, _config: &AppConfig) -> Result<()> {
    let store = runtime
        .block_on(Store::in_memory())
        .context("cannot bootstrap in-memory store")?;
    log::debug!("test command store:\n{}", runtime.block_on(store.render_dump()));
    Ok(())
}

/// 清空记录分区
pub fn reset(runtime: &Runtime, config: &AppConfig) -> Result<()> {
    let store = open_store(runtime, config)?;
    runtime
        .block_on(store.reset())
        .context("failed to reset records")?;
    println!("Records reset in {}", config.db_file.display());
    Ok(())
}

fn open_store(runtime: &Runtime, config: &AppConfig) -> Result<Store> {
    runtime
        .block_on(Store::open(&config.db_file))
        .with_context(|| format!("cannot open database {}", config.db_file.display()))
}
