//! 记录视图更新逻辑

use binip_core::{Event, OperationalMode};

use crate::message::OperationalMessage;
use crate::model::App;

/// 处理记录视图消息
pub fn update(app: &mut App, msg: OperationalMessage) -> Option<Event> {
    let in_list = app.machine.mode() == Some(OperationalMode::List);

    match msg {
        OperationalMessage::SelectPrevious if in_list => {
            app.record_cursor = app.record_cursor.saturating_sub(1);
            None
        }
        OperationalMessage::SelectNext if in_list => {
            if app.record_cursor + 1 < app.machine.record_ids().len() {
                app.record_cursor += 1;
            }
            None
        }
        OperationalMessage::OpenDetail if in_list => Some(Event::EnterDetail {
            id: app.cursor_record().unwrap_or_default().to_string(),
        }),
        OperationalMessage::Create => Some(Event::EnterCreate),
        OperationalMessage::Edit => Some(Event::EnterEdit {
            id: app.target_record(),
        }),
        OperationalMessage::Delete => Some(Event::EnterDeleteConfirm {
            id: app.target_record(),
        }),
        OperationalMessage::BackToList if !in_list => Some(Event::EnterList),
        _ => None,
    }
}
