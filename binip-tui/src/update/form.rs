//! 表单更新逻辑

use binip_core::Event;

use crate::message::FormMessage;
use crate::model::App;

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) -> Option<Event> {
    let form = app.form.as_mut()?;

    match msg {
        FormMessage::Previous => {
            form.select_previous();
            None
        }
        FormMessage::Next => {
            form.select_next();
            None
        }
        FormMessage::Toggle => {
            form.toggle();
            None
        }
        FormMessage::Answer(yes) => form.answer(yes),
        FormMessage::Input(c) => {
            form.input(c);
            None
        }
        FormMessage::Backspace => {
            form.backspace();
            None
        }
        FormMessage::Submit => form.submit(),
        FormMessage::Cancel => form.cancel(),
    }
}
