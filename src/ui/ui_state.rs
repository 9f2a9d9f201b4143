use std::time::Instant;

use ratatui::widgets::{Block, Borders};
use tui_textarea::{Input, TextArea};

use crate::core::chat::{ChatSession, QueryOutcome};
use crate::core::constants::INPUT_PLACEHOLDER;
use crate::ui::layout::ChatLayout;
use crate::ui::theme::Theme;

/// Everything the renderer needs: the chat session plus terminal-only state.
pub struct UiState {
    pub session: ChatSession,
    pub theme: Theme,
    pub sidebar_enabled: bool,
    /// Lines scrolled up from the bottom of the transcript.
    pub scroll_from_bottom: u16,
    /// Ceiling for `scroll_from_bottom`, measured from the last drawn frame.
    max_scroll: u16,
    pub pulse_start: Instant,
    textarea: TextArea<'static>,
}

impl UiState {
    pub fn new(session: ChatSession, theme: Theme, sidebar_enabled: bool) -> Self {
        let mut state = Self {
            session,
            theme,
            sidebar_enabled,
            scroll_from_bottom: 0,
            max_scroll: u16::MAX,
            pulse_start: Instant::now(),
            textarea: TextArea::default(),
        };
        state.configure_textarea();
        state
    }

    pub(crate) fn configure_textarea(&mut self) {
        self.textarea.set_style(self.theme.input_text_style);
        self.textarea.set_cursor_style(self.theme.input_cursor_style);
        self.textarea.set_cursor_line_style(ratatui::style::Style::default());
        self.textarea.set_placeholder_text(INPUT_PLACEHOLDER);
        self.textarea
            .set_placeholder_style(self.theme.input_placeholder_style);
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.input_border_style),
        );
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn input_line_count(&self) -> usize {
        self.textarea.lines().len()
    }

    pub fn get_input_text(&self) -> &str {
        self.session.input()
    }

    fn sync_input_from_textarea(&mut self) {
        self.session.set_input(self.textarea.lines().join("\n"));
    }

    /// Feed a key to the textarea and mirror the result into the session.
    pub fn apply_input(&mut self, input: impl Into<Input>) {
        self.textarea.input(input.into());
        self.sync_input_from_textarea();
    }

    pub fn insert_newline(&mut self) {
        self.textarea.insert_newline();
        self.sync_input_from_textarea();
    }

    pub fn paste(&mut self, text: &str) {
        self.textarea.insert_str(text.replace("\r\n", "\n").replace('\r', "\n"));
        self.sync_input_from_textarea();
    }

    /// Start a send from the keyboard. Returns the query to dispatch.
    pub fn submit(&mut self) -> Option<String> {
        self.sync_input_from_textarea();
        let query = self.session.begin_send()?;
        self.textarea = TextArea::default();
        self.configure_textarea();
        self.scroll_to_bottom();
        self.pulse_start = Instant::now();
        Some(query)
    }

    /// Start a send from a mouse click, honouring the disabled send button.
    pub fn click(&mut self, column: u16, row: u16, layout: &ChatLayout) -> Option<String> {
        if !layout.hits_send_button(column, row) || !self.session.can_click_send() {
            return None;
        }
        self.submit()
    }

    pub fn complete(&mut self, outcome: QueryOutcome) {
        self.session.complete(outcome);
        self.scroll_to_bottom();
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_from_bottom = self
            .scroll_from_bottom
            .saturating_add(lines)
            .min(self.max_scroll);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(lines);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_from_bottom = 0;
    }

    /// Record how far the transcript can scroll and pull the view back inside.
    pub fn set_max_scroll(&mut self, max: u16) {
        self.max_scroll = max;
        self.scroll_from_bottom = self.scroll_from_bottom.min(max);
    }

    /// Whether the thinking indicator is in the bright half of its pulse.
    pub fn pulse_on(&self) -> bool {
        (self.pulse_start.elapsed().as_millis() / 500) % 2 == 0
    }
}
