use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::format::truncate_with_ellipsis;
use crate::ui::{theme, App, Focus};

/// Left pane: app title, search box, filtered contact list.
pub fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(3), // search box
        Constraint::Min(0),    // contacts
    ])
    .split(area);

    let bg = Block::default().style(Style::default().bg(theme::BG_SIDEBAR));
    f.render_widget(bg, area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" Courier", theme::title()),
        Span::styled("  messenger", theme::text_dim()),
    ]));
    f.render_widget(title, chunks[0]);

    render_search_box(f, app, chunks[1]);
    render_contacts(f, app, chunks[2]);
}

fn render_search_box(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Search;
    let border_style = if focused {
        theme::border_focused()
    } else {
        theme::border_inactive()
    };

    let content = if app.search_term.is_empty() && !focused {
        Span::styled("Search", theme::text_dim())
    } else {
        Span::styled(app.search_term.clone(), theme::text_primary())
    };

    let input = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(input, area);

    if focused {
        let x = area.x + 1 + app.search_term.chars().count() as u16;
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn render_contacts(f: &mut Frame, app: &App, area: Rect) {
    let contacts = app.filtered_contacts();
    let width = (area.width as usize).saturating_sub(2);
    let mut lines: Vec<Line> = Vec::new();

    if contacts.is_empty() {
        lines.push(Line::from(Span::styled(" No matches", theme::text_dim())));
    }

    for (idx, contact) in contacts.iter().enumerate() {
        let is_cursor = idx == app.selected_index && app.focus != Focus::Composer;
        let is_active = app.active_conversation == Some(contact.id);

        let row_style = if is_cursor {
            Style::default().bg(theme::BG_SELECTED)
        } else {
            Style::default()
        };

        let name_style = if is_active {
            theme::accent().add_modifier(Modifier::BOLD)
        } else {
            theme::text_primary()
        };

        lines.push(
            Line::from(vec![
                Span::styled(format!(" [{}] ", contact.initials()), theme::text_muted()),
                Span::styled(contact.name.clone(), name_style),
            ])
            .style(row_style),
        );

        let preview = contact.last_message.as_deref().unwrap_or("");
        lines.push(
            Line::from(Span::styled(
                format!("      {}", truncate_with_ellipsis(preview, width.saturating_sub(6))),
                theme::text_muted(),
            ))
            .style(row_style),
        );

        if is_active {
            lines.push(
                Line::from(Span::styled(
                    format!("      {}", contact.last_active),
                    theme::text_dim(),
                ))
                .style(row_style),
            );
        }
    }

    let list = Paragraph::new(lines);
    f.render_widget(list, area);
}
