use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Number of spaces inserted for Tab.
const TAB_WIDTH: usize = 4;

/// Route a key press to the app.
///
/// Ctrl+S submits, Ctrl+L clears the input, Ctrl+Q / Ctrl+C quit. Everything
/// else edits the input buffer.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 's') {
        app.submit();
        return;
    }

    if is_ctrl_char(key, 'l') {
        app.editor_mut().clear();
        return;
    }

    let editor = app.editor_mut();
    match key.code {
        KeyCode::Enter => editor.newline(),
        KeyCode::Backspace => editor.backspace(),
        KeyCode::Delete => editor.delete(),
        KeyCode::Left => editor.move_left(),
        KeyCode::Right => editor.move_right(),
        KeyCode::Up => editor.move_up(),
        KeyCode::Down => editor.move_down(),
        KeyCode::Home => editor.move_home(),
        KeyCode::End => editor.move_end(),
        KeyCode::Tab => editor.insert_str(&" ".repeat(TAB_WIDTH)),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            editor.insert_char(ch)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
