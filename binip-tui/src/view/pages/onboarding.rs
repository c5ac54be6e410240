//! 引导页：当前表单 + 状态消息

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::components::form;
use crate::view::theme::{colors, Styles};

/// 渲染引导页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let form_height = app.form.as_ref().map_or(0, form::height);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(form_height), // 表单
            Constraint::Min(0),              // 消息
        ])
        .split(area);

    match &app.form {
        Some(active) => form::render(active, frame, layout[0]),
        None => {
            // 保存期间没有表单
            if let Some(prefix) = app.machine.pending_prefix() {
                let text = Paragraph::new(Line::styled(
                    format!("Saving {prefix}..."),
                    Style::default().fg(colors().warning),
                ));
                frame.render_widget(text, layout[1]);
                return;
            }
        }
    }

    let status = app.machine.status();
    if !status.is_empty() {
        let message = Paragraph::new(vec![Line::from(""), Line::styled(status, Styles::error())])
            .wrap(Wrap { trim: false });
        frame.render_widget(message, layout[1]);
    }
}
