//! 表单组件

use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{Form, FormKind};
use crate::view::theme::{colors, Styles};

/// 表单所需高度（含边框）
pub fn height(form: &Form) -> u16 {
    let title = u16::try_from(form.title.lines().count()).unwrap_or(u16::MAX);
    let body = match &form.kind {
        FormKind::Select { options, .. } => u16::try_from(options.len()).unwrap_or(u16::MAX),
        FormKind::Input { .. } => 3,
        FormKind::Confirm { .. } | FormKind::Note { .. } => 1,
    };
    title.saturating_add(body).saturating_add(3)
}

/// 渲染表单
pub fn render(form: &Form, frame: &mut Frame, area: Rect) {
    let c = colors();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = form
        .title
        .lines()
        .map(|l| Line::styled(l.to_string(), Styles::title()))
        .collect();
    lines.push(Line::from(""));

    let mut cursor = None;

    match &form.kind {
        FormKind::Select { options, selected } => {
            for (i, option) in options.iter().enumerate() {
                if i == *selected {
                    lines.push(Line::styled(format!("> {option}"), Styles::selected()));
                } else {
                    lines.push(Line::from(format!("  {option}")));
                }
            }
        }
        FormKind::Input {
            placeholder,
            description,
            value,
            error,
        } => {
            lines.push(Line::styled(*description, Style::default().fg(c.muted)));
            let input = if value.is_empty() {
                Span::styled(*placeholder, Style::default().fg(c.muted))
            } else {
                Span::raw(value.clone())
            };
            let row = u16::try_from(lines.len()).unwrap_or(u16::MAX);
            lines.push(Line::from(vec![Span::raw("> "), input]));

            let column = u16::try_from(value.width()).unwrap_or(u16::MAX).saturating_add(2);
            cursor = Some(Position::new(
                inner.x.saturating_add(column),
                inner.y.saturating_add(row),
            ));

            match error {
                Some(e) => lines.push(Line::styled(format!("* {e}"), Styles::error())),
                None => lines.push(Line::from("")),
            }
        }
        FormKind::Confirm {
            affirmative,
            negative,
            value,
        } => {
            let (yes, no) = if *value {
                (Styles::selected(), Style::default().fg(c.fg))
            } else {
                (Style::default().fg(c.fg), Styles::selected())
            };
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!(" {affirmative} "), yes),
                Span::raw("    "),
                Span::styled(format!(" {negative} "), no),
            ]));
        }
        FormKind::Note { description } => {
            lines.push(Line::styled(description.clone(), Style::default().fg(c.muted)));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);

    if let Some(position) = cursor.filter(|p| inner.contains(*p)) {
        frame.set_cursor_position(position);
    }
}
