use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    Tap,
    Minus,
    Clear,
    Copy,
    Confirm,
    Dismiss,
    ScrollUp,
    ScrollDown,
}

/// Map a key to an action.
///
/// While a confirmation dialog is open only yes/no (and Ctrl+C) are
/// recognized.
pub fn classify_key(key: KeyEvent, dialog_open: bool) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') {
        return InputAction::Quit;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputAction::None;
    }

    if dialog_open {
        return match key.code {
            KeyCode::Enter => InputAction::Confirm,
            KeyCode::Esc => InputAction::Dismiss,
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'y' => InputAction::Confirm,
                'n' => InputAction::Dismiss,
                _ => InputAction::None,
            },
            _ => InputAction::None,
        };
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => InputAction::Tap,
        KeyCode::Delete => InputAction::Clear,
        KeyCode::Up => InputAction::ScrollUp,
        KeyCode::Down => InputAction::ScrollDown,
        KeyCode::Esc => InputAction::Quit,
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            't' | '+' => InputAction::Tap,
            'm' | '-' => InputAction::Minus,
            'x' => InputAction::Clear,
            'c' => InputAction::Copy,
            'q' => InputAction::Quit,
            _ => InputAction::None,
        },
        _ => InputAction::None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    let action = classify_key(key, app.state().dialog.is_visible());
    app.perform(action);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
