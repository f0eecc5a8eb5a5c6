use crossterm::event::KeyCode;

use crate::app::App;
use crate::popup::Popup;

pub(crate) fn handle_popup_key(app: &mut App, code: KeyCode) {
    if !matches!(app.popup, Some(Popup::DeleteConfirm { .. })) {
        return;
    }
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.answer_popup(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.answer_popup(false),
        _ => {}
    }
}
