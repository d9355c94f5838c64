// Centralized theme - all colors and styles live here.

use ratatui::style::{Color, Modifier, Style};

/// App background.
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Sidebar background - very dark, almost black.
pub const BG_SIDEBAR: Color = Color::Rgb(12, 12, 12);

/// Selected contact row background.
pub const BG_SELECTED: Color = Color::Rgb(32, 32, 32);

/// Own message bubble background.
pub const BG_BUBBLE_OWN: Color = Color::Rgb(30, 50, 70);

/// Peer message bubble background.
pub const BG_BUBBLE_PEER: Color = Color::Rgb(24, 24, 24);

/// Primary text - off-white for readability.
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

/// Secondary/muted text.
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Dimmed text for hints and placeholders.
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

/// Primary accent - muted blue for focus and the active contact.
pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);

/// Muted green - connection up.
pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);

/// Muted red - connection down.
pub const ACCENT_ERROR: Color = Color::Rgb(204, 102, 102);

pub fn text_primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn text_dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn accent() -> Style {
    Style::default().fg(ACCENT_PRIMARY)
}

pub fn accent_success() -> Style {
    Style::default().fg(ACCENT_SUCCESS)
}

pub fn accent_error() -> Style {
    Style::default().fg(ACCENT_ERROR)
}

pub fn title() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn border_focused() -> Style {
    Style::default().fg(ACCENT_PRIMARY)
}

pub fn border_inactive() -> Style {
    Style::default().fg(Color::Rgb(50, 50, 50))
}
