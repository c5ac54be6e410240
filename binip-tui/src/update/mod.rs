//!
//! src/update/mod.rs
//! Update 层：状态更新
//!
//! 两个入口：
//!     · update()  消费 Event 层产生的 AppMessage，只修改界面状态；
//!                 需要改变会话时返回一个核心 `Event`，由 app.rs 投递给调度器
//!     · apply()   消费调度器队列中的核心 `Event`：先做观察者处理（安装表单），
//!                 再交给核心路由，最后清理过期表单，返回需要调度的命令

mod form;
mod operational;
mod session;

use binip_core::Event;

use crate::message::AppMessage;
use crate::model::App;

pub use session::apply;

/// 处理界面消息
pub fn update(app: &mut App, msg: AppMessage) -> Option<Event> {
    match msg {
        AppMessage::Quit => Some(Event::Quit),

        AppMessage::ToggleHelp => {
            app.show_full_help = !app.show_full_help;
            None
        }

        AppMessage::Form(form_msg) => form::update(app, form_msg),

        AppMessage::Operational(op_msg) => operational::update(app, op_msg),

        AppMessage::Noop => None,
    }
}
