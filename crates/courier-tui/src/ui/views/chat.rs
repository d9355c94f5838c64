use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use courier_core::models::Message;

use crate::ui::format::{bubble_time, wrap_text};
use crate::ui::{theme, App, Focus};

/// Right pane: conversation header, message bubbles, composer.
pub fn render_chat(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(2), // header
        Constraint::Min(0),    // messages
        Constraint::Length(3), // composer
    ])
    .split(area);

    render_header(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_composer(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        format!(" {}", app.header_title()),
        theme::title(),
    ))];
    if let Some(subtitle) = app.header_subtitle() {
        lines.push(Line::from(Span::styled(
            format!(" {}", subtitle),
            theme::text_muted(),
        )));
    }
    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border_inactive()),
    );
    f.render_widget(header, area);
}

fn render_messages(f: &mut Frame, app: &mut App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let Some(active) = app.active_conversation else {
        let prompt = Paragraph::new(Line::from(Span::styled(
            "Select a chat to start messaging",
            theme::text_dim(),
        )))
        .alignment(Alignment::Center);
        // Rough vertical centering: pad down to the middle row
        let middle = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        f.render_widget(prompt, middle);
        return;
    };

    let store = app.store.clone();
    let store = store.borrow();
    let messages = store.messages(active);

    let content_width = (area.width as usize).saturating_sub(2);
    // Bubbles take at most 65% of the pane, like the original layout.
    let bubble_width = (content_width * 65 / 100).max(12);

    let mut lines: Vec<Line> = Vec::new();
    for message in messages {
        push_bubble(&mut lines, message, bubble_width);
        lines.push(Line::from(""));
    }

    let total = lines.len();
    let visible = area.height as usize;
    let max_start = total.saturating_sub(visible);
    let start = app.scroll_offset.min(max_start);
    // Remember the bottom so scroll_up can leave the pinned position from
    // it, and write the clamped offset back so the next step moves from a
    // concrete position; MAX stays MAX to keep the view pinned to new
    // messages.
    app.max_scroll = max_start;
    if app.scroll_offset != usize::MAX {
        app.scroll_offset = start;
    }

    let pane = Paragraph::new(lines).scroll((start as u16, 0));
    f.render_widget(pane, area);
}

fn push_bubble(lines: &mut Vec<Line>, message: &Message, bubble_width: usize) {
    let own = message.is_from_local_user();
    let (bg, alignment) = if own {
        (theme::BG_BUBBLE_OWN, Alignment::Right)
    } else {
        (theme::BG_BUBBLE_PEER, Alignment::Left)
    };
    let bubble_style = Style::default().fg(theme::TEXT_PRIMARY).bg(bg);

    let wrapped = wrap_text(&message.message_text, bubble_width);
    let row_count = wrapped.len();
    for (i, row) in wrapped.into_iter().enumerate() {
        let mut spans = vec![Span::styled(format!(" {} ", row), bubble_style)];
        if i + 1 == row_count {
            if let Some(time) = bubble_time(&message.timestamp) {
                let label = Span::styled(format!(" {}", time), theme::text_dim());
                if own {
                    spans.insert(0, label);
                } else {
                    spans.push(label);
                }
            }
        }
        lines.push(Line::from(spans).alignment(alignment));
    }
}

fn render_composer(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Composer;
    let border_style = if focused {
        theme::border_focused()
    } else {
        theme::border_inactive()
    };

    let content = if app.composer.is_empty() && !focused {
        Span::styled("Type your message...", theme::text_dim())
    } else {
        Span::styled(app.composer.clone(), theme::text_primary())
    };

    let composer = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(composer, area);

    if focused {
        let x = area.x + 1 + app.composer.chars().count() as u16;
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}
