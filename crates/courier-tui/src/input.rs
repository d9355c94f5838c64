//! Keyboard routing. One entry point, dispatched on the focused pane.

use crossterm::event::{KeyCode, KeyEvent};

use crate::ui::{App, Focus};

pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    match app.focus {
        Focus::Contacts => handle_contacts_key(app, key),
        Focus::Search => handle_search_key(app, key),
        Focus::Composer => handle_composer_key(app, key),
    }
}

fn handle_contacts_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Enter => app.activate_selected(),
        // Jump straight to the composer of the current conversation
        KeyCode::Tab | KeyCode::Char('i') if app.active_conversation.is_some() => {
            app.focus = Focus::Composer;
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.search_term.clear();
            app.selected_index = 0;
            app.focus = Focus::Contacts;
        }
        KeyCode::Enter => {
            app.focus = Focus::Contacts;
        }
        KeyCode::Backspace => app.search_backspace(),
        KeyCode::Char(c) => app.search_input(c),
        _ => {}
    }
}

fn handle_composer_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Tab => app.focus = Focus::Contacts,
        KeyCode::Enter => app.submit_composer(),
        KeyCode::Backspace => {
            app.composer.pop();
        }
        KeyCode::Up => app.scroll_up(1),
        KeyCode::Down => app.scroll_down(1),
        KeyCode::Char(c) => app.composer.push(c),
        _ => {}
    }
}
