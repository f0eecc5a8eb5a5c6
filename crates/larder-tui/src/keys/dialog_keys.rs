use crossterm::event::{KeyCode, KeyModifiers};
use larder_core::{DialogEvent, DialogKey};

use crate::app::App;

/// Translate a terminal key into the dialog's event protocol.
pub(crate) fn dialog_event_for(app: &App, code: KeyCode, modifiers: KeyModifiers) -> DialogEvent {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let Some(dialog) = app.page.dialog.as_ref() else {
        return DialogEvent::Key(DialogKey::Other);
    };

    match code {
        KeyCode::Esc => DialogEvent::Close,
        KeyCode::Up => DialogEvent::Key(DialogKey::ArrowUp),
        KeyCode::Down => DialogEvent::Key(DialogKey::ArrowDown),
        KeyCode::Char('p' | 'k') if ctrl => DialogEvent::Key(DialogKey::ArrowUp),
        KeyCode::Char('n' | 'j') if ctrl => DialogEvent::Key(DialogKey::ArrowDown),
        // Enter on a focused option activates it like a button press;
        // otherwise it asks the dialog to confirm the single match.
        KeyCode::Enter => match dialog.cursor() {
            Some(index) => DialogEvent::Click(index),
            None => DialogEvent::Key(DialogKey::Enter),
        },
        KeyCode::Char('u') if ctrl => DialogEvent::Input(String::new()),
        KeyCode::Backspace => {
            let mut text = dialog.filter_text().to_string();
            text.pop();
            DialogEvent::Input(text)
        }
        KeyCode::Char(c) if !ctrl => DialogEvent::Input(format!("{}{c}", dialog.filter_text())),
        _ => DialogEvent::Key(DialogKey::Other),
    }
}

pub(crate) fn handle_dialog_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    let event = dialog_event_for(app, code, modifiers);
    app.dialog_event(event);
}
