use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Lines moved per PageUp / PageDown.
pub const PAGE_SCROLL_LINES: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    /// Send the input buffer.
    Submit,
    InsertNewline,
    ScrollUp(u16),
    ScrollDown(u16),
    /// Hand the key to the input textarea.
    Edit,
}

pub fn classify_key(key: &KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyAction::Quit
        }
        KeyCode::Enter
            if key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
        {
            KeyAction::InsertNewline
        }
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::PageUp => KeyAction::ScrollUp(PAGE_SCROLL_LINES),
        KeyCode::PageDown => KeyAction::ScrollDown(PAGE_SCROLL_LINES),
        _ => KeyAction::Edit,
    }
}
