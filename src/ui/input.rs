use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    NewQuote,
    Copy,
    Share,
    Quit,
}

/// Map a key event to an action. Releases and repeats are ignored.
pub fn action_for(key: KeyEvent) -> Option<InputAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        return Some(InputAction::Quit);
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(InputAction::Quit),
        KeyCode::Enter => Some(InputAction::NewQuote),
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'n' | ' ' => Some(InputAction::NewQuote),
            'c' | 'y' => Some(InputAction::Copy),
            's' | 't' => Some(InputAction::Share),
            'q' => Some(InputAction::Quit),
            _ => None,
        },
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
