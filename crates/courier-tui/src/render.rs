use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::ui;
use crate::ui::components::{render_sidebar, render_statusbar};
use crate::ui::views::render_chat;
use crate::ui::App;

pub(crate) fn render(f: &mut Frame, app: &mut App) {
    let bg = Block::default().style(Style::default().bg(ui::theme::BG_APP));
    f.render_widget(bg, f.area());

    let rows = Layout::vertical([
        Constraint::Min(0),    // main
        Constraint::Length(1), // statusbar
    ])
    .split(f.area());

    let panes = Layout::horizontal([
        Constraint::Length(34), // contact sidebar
        Constraint::Min(0),     // conversation
    ])
    .split(rows[0]);

    render_sidebar(f, app, panes[0]);
    render_chat(f, app, panes[1]);
    render_statusbar(f, app, rows[1]);
}
