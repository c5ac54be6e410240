//!
//! app.rs
//! 应用主循环
//!
//! 所有会话事件都经过同一个调度器队列：按键产生的事件由 `post` 投递，
//! 命令的后续事件由调度器自行入队。每轮先清空队列，再渲染，然后等待输入：
//!
//! loop {
//!
//!     while let Some(event) = dispatcher.try_next() { update::apply(..) }
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit() { break }                  // 状态机进入 Quitting
//!     if let Some(event) = poll_event() {             // 在此等待 100ms
//!         let msg = handle_event(event , &app);       // 按键 → AppMessage
//!         update::update(&mut app , msg)              // AppMessage → Event
//!     }
//! }

use std::time::Duration;

use anyhow::Result;
use binip_core::Dispatcher;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, dispatcher: &mut Dispatcher) -> Result<()> {
    dispatcher.schedule_all(app.machine.start());

    loop {
        // 1. 处理已到达的事件
        drain(app, dispatcher);

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit() {
            break;
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            if let Some(event) = update::update(app, msg) {
                dispatcher.post(event);
            }
        }
    }

    Ok(())
}

/// 逐条处理队列中的事件
fn drain(app: &mut App, dispatcher: &mut Dispatcher) {
    while let Some(event) = dispatcher.try_next() {
        let commands = update::apply(app, event);
        dispatcher.schedule_all(commands);
    }
}
