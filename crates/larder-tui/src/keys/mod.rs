mod dialog_keys;
mod popup_keys;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::{App, Mode};

pub(crate) fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    // The selection dialog is modal and takes every key while open.
    if app.page.dialog_open() {
        dialog_keys::handle_dialog_key(app, code, modifiers);
        return;
    }

    if app.popup.is_some() {
        popup_keys::handle_popup_key(app, code);
        return;
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, code, modifiers),
        Mode::Search => handle_search_mode(app, code),
    }
}

fn handle_normal_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => app.should_quit = true,
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('a') => app.toggle_add_form(),
        KeyCode::Char('o') | KeyCode::Enter => app.open_picker(),
        KeyCode::Char('s') => app.submit_form(),
        KeyCode::Char('d') => app.request_delete(),
        KeyCode::Char('j') | KeyCode::Down => app.entry_down(),
        KeyCode::Char('k') | KeyCode::Up => app.entry_up(),
        KeyCode::Char('/') => app.mode = Mode::Search,
        KeyCode::Char('?') => app.toggle_help(),
        _ => {}
    }
}

fn handle_search_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Enter => app.mode = Mode::Normal,
        KeyCode::Backspace => {
            let mut query = app.search_query().to_string();
            query.pop();
            app.set_search(&query);
        }
        KeyCode::Char(c) => {
            let query = format!("{}{c}", app.search_query());
            app.set_search(&query);
        }
        _ => {}
    }
}
