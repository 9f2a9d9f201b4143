use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

use crate::core::constants::{SIDEBAR_MIN_TERMINAL_WIDTH, SIDEBAR_WIDTH};

pub const SEND_LABEL: &str = "Send";

/// Visible input rows before the textarea starts scrolling.
pub const MAX_INPUT_ROWS: u16 = 5;

/// Screen regions of one frame. The event loop uses the same geometry for
/// mouse hit-testing that the renderer uses for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatLayout {
    pub sidebar: Option<Rect>,
    pub transcript: Rect,
    pub input: Rect,
    pub send_button: Rect,
}

impl ChatLayout {
    pub fn compute(area: Rect, sidebar_enabled: bool, input_rows: usize) -> Self {
        let show_sidebar = sidebar_enabled && area.width >= SIDEBAR_MIN_TERMINAL_WIDTH;

        let (sidebar, chat_area) = if show_sidebar {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .split(area);
            (Some(columns[0]), columns[1])
        } else {
            (None, area)
        };

        let rows = (input_rows as u16).clamp(1, MAX_INPUT_ROWS);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(rows + 2)])
            .split(chat_area);

        let input_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(send_button_width()),
            ])
            .split(chunks[1]);

        ChatLayout {
            sidebar,
            transcript: chunks[0],
            input: input_row[0],
            send_button: input_row[1],
        }
    }

    pub fn hits_send_button(&self, column: u16, row: u16) -> bool {
        self.send_button.contains(Position::new(column, row))
    }
}

/// Label plus one column of padding and one border on each side.
pub fn send_button_width() -> u16 {
    UnicodeWidthStr::width(SEND_LABEL) as u16 + 4
}
