use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;

/// Translates one key event into app mutations.
///
/// The entry line is always live: printable characters edit it, so
/// single-letter shortcuts are reserved for keys that cannot collide with
/// typing (Tab, arrows, Delete, Esc, Ctrl chords).
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Tab => app.switch_pane(),
        KeyCode::Up => app.select_prev(),
        KeyCode::Down => app.select_next(),
        KeyCode::Delete => app.remove_selected(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Esc => {
            // First Escape clears a partial entry; a second one quits.
            if !app.clear_entry() {
                app.request_quit();
            }
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_char(ch);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}
