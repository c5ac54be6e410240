//! 记录页
//!
//! 列表模式显示存储内容和记录列表，详情模式显示当前记录，
//! 新建 / 编辑 / 删除模式显示对应表单。状态消息始终显示在底部。

use binip_core::OperationalMode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::components::form;
use crate::view::theme::{colors, Styles};

/// 渲染记录页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // 内容
            Constraint::Length(1), // 状态消息
        ])
        .split(area);

    match app.machine.mode() {
        Some(OperationalMode::List) => render_list(app, frame, layout[0]),
        Some(OperationalMode::Detail) => render_detail(app, frame, layout[0]),
        Some(_) => {
            if let Some(active) = &app.form {
                let height = form::height(active).min(layout[0].height);
                let area = Rect { height, ..layout[0] };
                form::render(active, frame, area);
            }
        }
        None => {}
    }

    let status = Paragraph::new(Line::styled(app.machine.status(), Styles::status()));
    frame.render_widget(status, layout[1]);
}

/// 列表模式：左侧存储内容，右侧记录
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let dump: Vec<Line> = app
        .dump_text()
        .lines()
        .map(|line| {
            if line.starts_with("bucket: ") {
                Line::styled(line.to_string(), Styles::header())
            } else {
                Line::from(line.to_string())
            }
        })
        .collect();
    let dump_block = Block::default()
        .title(" Store ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));
    frame.render_widget(Paragraph::new(dump).block(dump_block), columns[0]);

    let ids = app.machine.record_ids();
    let records_block = Block::default()
        .title(format!(" Records ({}) ", ids.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));

    if ids.is_empty() {
        let empty = Paragraph::new(Line::styled("No records", Style::default().fg(c.muted)))
            .block(records_block);
        frame.render_widget(empty, columns[1]);
        return;
    }

    let items: Vec<ListItem> = ids.iter().map(|id| ListItem::new(id.as_str())).collect();
    let list = List::new(items)
        .block(records_block)
        .highlight_style(Styles::selected())
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.record_cursor));
    frame.render_stateful_widget(list, columns[1], &mut state);
}

/// 详情模式
fn render_detail(app: &App, frame: &mut Frame, area: Rect) {
    let id = app.machine.selected_record().unwrap_or_default();
    let lines = vec![
        Line::from(""),
        Line::styled(format!("  Detail view for record: {id}"), Styles::title()),
        Line::from(""),
        Line::styled(
            "  Record fields are not defined yet",
            Style::default().fg(colors().warning),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
