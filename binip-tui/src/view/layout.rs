//! 主布局渲染

use binip_core::PrimaryState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 帮助栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                              // 标题栏
            Constraint::Min(1),                                 // 主内容区
            Constraint::Length(components::footer::height(app)), // 帮助栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_page_content(app, frame, main_layout[1]);
    components::footer::render(app, frame, main_layout[2]);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let state = match (app.machine.onboarding(), app.machine.mode()) {
        (Some(sub), _) => format!("{} / {sub}", app.machine.primary()),
        (None, Some(mode)) => format!("{} / {mode}", app.machine.primary()),
        (None, None) => app.machine.primary().to_string(),
    };
    let title = Paragraph::new(format!(" binip v{}  ·  {state}", env!("CARGO_PKG_VERSION")))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前主状态渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let page_title = match app.machine.primary() {
        PrimaryState::Onboarding => "Network Setup",
        PrimaryState::Operational => "Records",
        PrimaryState::Quitting => "Bye",
    };

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors().border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.machine.primary() {
        PrimaryState::Onboarding => pages::onboarding::render(app, frame, inner_area),
        PrimaryState::Operational => pages::records::render(app, frame, inner_area),
        PrimaryState::Quitting => {}
    }
}
