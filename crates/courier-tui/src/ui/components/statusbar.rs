use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::{theme, App, Focus};

/// Bottom row: connection state on the left, key hints on the right.
pub fn render_statusbar(f: &mut Frame, app: &App, area: Rect) {
    let (glyph, style) = if app.connected {
        ("● online", theme::accent_success())
    } else {
        ("○ offline", theme::accent_error())
    };

    let hints = match app.focus {
        Focus::Contacts => "↑↓ select · Enter open · / search · q quit",
        Focus::Search => "type to filter · Enter keep · Esc clear",
        Focus::Composer => "Enter send · ↑↓ scroll · Esc contacts",
    };

    let left = format!(" {}", glyph);
    let pad = (area.width as usize)
        .saturating_sub(left.chars().count() + hints.chars().count() + 1);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(left, style),
        Span::raw(" ".repeat(pad)),
        Span::styled(hints, theme::text_dim()),
        Span::raw(" "),
    ]));
    f.render_widget(bar, area);
}
