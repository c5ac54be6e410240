//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use binip_core::PrimaryState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::event::keymap::{DefaultKeymap, KeyBinding};
use crate::message::{AppMessage, FormMessage, OperationalMessage};
use crate::model::{App, Form, FormKind};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，避免 Windows 终端上的重复按键
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 文本输入时，字符全部进入输入框
    if let Some(form) = app.form.as_ref().filter(|f| f.is_text_input()) {
        return handle_form_keys(key, form);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ToggleHelp;
    }

    if let Some(form) = &app.form {
        return handle_form_keys(key, form);
    }

    if app.machine.primary() == PrimaryState::Operational {
        return handle_operational_keys(key);
    }

    AppMessage::Noop
}

/// 处理表单按键
fn handle_form_keys(key: KeyEvent, form: &Form) -> AppMessage {
    if DefaultKeymap::CONFIRM.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Form(FormMessage::Cancel);
    }

    let msg = match form.kind {
        FormKind::Select { .. } => {
            if KeyBinding::any(&DefaultKeymap::UP, &key) {
                Some(FormMessage::Previous)
            } else if KeyBinding::any(&DefaultKeymap::DOWN, &key) {
                Some(FormMessage::Next)
            } else {
                None
            }
        }
        FormKind::Input { .. } => match key.code {
            KeyCode::Backspace => Some(FormMessage::Backspace),
            KeyCode::Char(c) if !c.is_control() => Some(FormMessage::Input(c)),
            _ => None,
        },
        FormKind::Confirm { .. } => {
            if KeyBinding::any(&DefaultKeymap::TOGGLE, &key) {
                Some(FormMessage::Toggle)
            } else if DefaultKeymap::YES.matches(&key) {
                Some(FormMessage::Answer(true))
            } else if DefaultKeymap::NO.matches(&key) {
                Some(FormMessage::Answer(false))
            } else {
                None
            }
        }
        FormKind::Note { .. } => None,
    };

    msg.map_or(AppMessage::Noop, AppMessage::Form)
}

/// 处理记录视图按键
fn handle_operational_keys(key: KeyEvent) -> AppMessage {
    let msg = if KeyBinding::any(&DefaultKeymap::UP, &key) {
        OperationalMessage::SelectPrevious
    } else if KeyBinding::any(&DefaultKeymap::DOWN, &key) {
        OperationalMessage::SelectNext
    } else if DefaultKeymap::CONFIRM.matches(&key) {
        OperationalMessage::OpenDetail
    } else if DefaultKeymap::ACTION_ADD.matches(&key) {
        OperationalMessage::Create
    } else if DefaultKeymap::ACTION_EDIT.matches(&key) {
        OperationalMessage::Edit
    } else if DefaultKeymap::ACTION_DELETE.matches(&key) {
        OperationalMessage::Delete
    } else if DefaultKeymap::ACTION_LIST.matches(&key) || DefaultKeymap::BACK.matches(&key) {
        OperationalMessage::BackToList
    } else {
        return AppMessage::Noop;
    };
    AppMessage::Operational(msg)
}
