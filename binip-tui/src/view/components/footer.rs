//! 底部帮助栏组件
//!
//! 收起时一行快捷键提示；展开时列出全部快捷键，并显示调试状态。

use binip_core::{OperationalMode, PrimaryState};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FormKind};
use crate::view::theme::Styles;

type Hint = (&'static str, &'static str);

/// 帮助栏高度
pub fn height(app: &App) -> u16 {
    if app.show_full_help {
        u16::try_from(full_help(app).len()).unwrap_or(u16::MAX).saturating_add(1)
    } else {
        1
    }
}

/// 渲染帮助栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let lines = if app.show_full_help {
        let mut lines: Vec<Line> = full_help(app)
            .into_iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("{key:>10}"), Styles::hint_key()),
                    Span::raw("  "),
                    Span::styled(desc, Styles::hint_desc()),
                ])
            })
            .collect();
        let debug = if app.debug { "on" } else { "off" };
        lines.push(Line::from(vec![
            Span::styled(format!("{:>10}", "Debug:"), Styles::hint_desc()),
            Span::raw("  "),
            Span::styled(debug, Styles::hint_key()),
        ]));
        lines
    } else {
        vec![short_help(app)]
    };

    frame.render_widget(Paragraph::new(lines), area);
}

fn short_help(app: &App) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, desc)) in get_hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }
    Line::from(spans)
}

fn full_help(app: &App) -> Vec<Hint> {
    let mut hints = get_hints(app);
    hints.retain(|(key, _)| !matches!(*key, "?" | "Ctrl+C"));
    hints.push(("?", "Close help"));
    hints.push(("Ctrl+C", "Force quit"));
    hints
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<Hint> {
    let mut hints = Vec::new();

    match app.form.as_ref().map(|f| &f.kind) {
        Some(FormKind::Select { .. }) => {
            hints.push(("↑↓", "Select"));
            hints.push(("Enter", "Choose"));
        }
        Some(FormKind::Input { .. }) => {
            hints.push(("Enter", "Submit"));
            hints.push(("Ctrl+C", "Quit"));
        }
        Some(FormKind::Confirm { .. }) => {
            hints.push(("←→", "Toggle"));
            hints.push(("y/n", "Answer"));
            hints.push(("Enter", "Confirm"));
        }
        Some(FormKind::Note { .. }) => {
            hints.push(("Enter", "Continue"));
        }
        None => {
            if app.machine.primary() == PrimaryState::Operational {
                if app.machine.mode() == Some(OperationalMode::List) {
                    hints.push(("↑↓", "Select"));
                    hints.push(("Enter", "Detail"));
                } else {
                    hints.push(("Esc", "List"));
                }
                hints.push(("n", "New"));
                hints.push(("e", "Edit"));
                hints.push(("d", "Delete"));
            }
        }
    }

    if app.form.as_ref().is_some_and(|f| f.cancel().is_some()) {
        hints.push(("Esc", "Cancel"));
    }

    if !app.form.as_ref().is_some_and(|f| f.is_text_input()) {
        hints.push(("?", "Help"));
        hints.push(("q", "Quit"));
    }

    hints
}
