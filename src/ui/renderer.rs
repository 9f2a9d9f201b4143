use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::core::constants::{PRODUCT_NAME, THINKING_TEXT};
use crate::core::message::Sender;
use crate::ui::bot_text::{render_bot_text, to_lines};
use crate::ui::layout::{ChatLayout, SEND_LABEL};
use crate::ui::theme::Theme;
use crate::ui::ui_state::UiState;

const SIDEBAR_ITEMS: [&str; 3] = ["+ New Chat", "✉ Saved Notes", "⚙ Settings"];
const SIDEBAR_FOOTER: &str = "⚡ Powered by AI";

pub fn layout_for(area: Rect, state: &UiState) -> ChatLayout {
    ChatLayout::compute(area, state.sidebar_enabled, state.input_line_count())
}

pub fn ui(f: &mut Frame, state: &UiState) {
    let theme = &state.theme;
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_color)),
        f.area(),
    );

    let layout = layout_for(f.area(), state);

    if let Some(sidebar) = layout.sidebar {
        render_sidebar(f, sidebar, theme);
    }

    render_transcript(f, layout.transcript, state);

    f.render_widget(state.textarea(), layout.input);

    let button_style = if state.session.can_click_send() {
        theme.send_button_style
    } else {
        theme.send_button_disabled_style
    };
    let button = Paragraph::new(Line::from(SEND_LABEL))
        .alignment(Alignment::Center)
        .style(button_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.input_border_style),
        );
    f.render_widget(button, layout.send_button);
}

/// Transcript lines in display order, including the thinking indicator.
pub fn build_display_lines<'a>(state: &'a UiState, pulse_on: bool) -> Vec<Line<'a>> {
    let theme = &state.theme;
    let mut lines = Vec::new();

    for message in state.session.messages() {
        match message.sender {
            Sender::User => {
                for text in message.text.split('\n') {
                    lines.push(
                        Line::from(Span::styled(text, theme.user_text_style))
                            .alignment(Alignment::Right),
                    );
                }
            }
            Sender::Bot => {
                let blocks = render_bot_text(&message.text);
                lines.extend(to_lines(&blocks, theme));
            }
        }
        lines.push(Line::from(""));
    }

    if state.session.is_loading() {
        let style = if pulse_on {
            theme.thinking_style.add_modifier(Modifier::BOLD)
        } else {
            theme.thinking_style.add_modifier(Modifier::DIM)
        };
        lines.push(Line::from(Span::styled(THINKING_TEXT, style)));
    }

    lines
}

fn transcript_paragraph(state: &UiState) -> Paragraph<'_> {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(state.theme.transcript_border_style);
    Paragraph::new(build_display_lines(state, state.pulse_on()))
        .block(block)
        .wrap(Wrap { trim: false })
}

fn render_transcript(f: &mut Frame, area: Rect, state: &UiState) {
    let paragraph = transcript_paragraph(state);
    let scroll = scroll_offset(paragraph.line_count(area.width), area.height, state.scroll_from_bottom);
    f.render_widget(paragraph.scroll((scroll, 0)), area);
}

/// How far the transcript can scroll up from the bottom in a frame of `area`.
pub fn max_scroll_from_bottom(area: Rect, state: &UiState) -> u16 {
    let transcript = layout_for(area, state).transcript;
    let total = transcript_paragraph(state).line_count(transcript.width);
    scroll_offset(total, transcript.height, 0)
}

/// Top offset that keeps the view `from_bottom` lines above the end.
pub fn scroll_offset(total_lines: usize, viewport_height: u16, from_bottom: u16) -> u16 {
    let total = u16::try_from(total_lines).unwrap_or(u16::MAX);
    let max_offset = total.saturating_sub(viewport_height);
    max_offset.saturating_sub(from_bottom)
}

fn render_sidebar(f: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme.transcript_border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(PRODUCT_NAME, theme.sidebar_title_style))),
        rows[0],
    );

    let items: Vec<ListItem> = SIDEBAR_ITEMS
        .iter()
        .map(|item| ListItem::new(Line::from(Span::styled(*item, theme.sidebar_item_style))))
        .collect();
    f.render_widget(List::new(items), rows[1]);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(SIDEBAR_FOOTER, theme.sidebar_footer_style))),
        rows[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chat::ChatSession;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &UiState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn state_with(messages: &[(&str, bool)], sidebar: bool) -> UiState {
        let mut session = ChatSession::new("Hello student");
        for (text, answered) in messages {
            session.set_input(*text);
            session.begin_send();
            if *answered {
                session.complete(Ok(Some(format!("Answer to {text}\n- point one"))));
            }
        }
        UiState::new(session, Theme::monochrome(), sidebar)
    }

    #[test]
    fn renders_transcript_and_send_button() {
        let state = state_with(&[("syllabus?", true)], false);
        let screen = draw(&state, 60, 16);
        assert!(screen.contains("Hello student"));
        assert!(screen.contains("syllabus?"));
        assert!(screen.contains("Answer to syllabus?"));
        assert!(screen.contains("• point one"));
        assert!(screen.contains("Send"));
        assert!(!screen.contains("Thinking"));
    }

    #[test]
    fn thinking_indicator_shows_while_loading() {
        let state = state_with(&[("pending?", false)], false);
        let screen = draw(&state, 60, 16);
        assert!(screen.contains("Thinking..."));
    }

    #[test]
    fn sidebar_appears_only_when_wide() {
        let state = state_with(&[], true);
        let wide = draw(&state, 100, 20);
        assert!(wide.contains(PRODUCT_NAME));
        assert!(wide.contains("New Chat"));
        assert!(wide.contains("Powered by AI"));

        let narrow = draw(&state, 60, 20);
        assert!(!narrow.contains(PRODUCT_NAME));
    }

    #[test]
    fn user_lines_are_right_aligned() {
        let state = state_with(&[("hi", true)], false);
        let lines = build_display_lines(&state, true);
        let user_line = lines
            .iter()
            .find(|line| line.to_string() == "hi")
            .expect("user line");
        assert_eq!(user_line.alignment, Some(Alignment::Right));
    }

    #[test]
    fn display_lines_count_blocks_and_spacers() {
        let state = state_with(&[("q", true)], false);
        // greeting + spacer, user + spacer, answer (2 lines) + spacer
        assert_eq!(build_display_lines(&state, true).len(), 7);

        let loading = state_with(&[("q", false)], false);
        assert_eq!(build_display_lines(&loading, true).len(), 5);
    }

    #[test]
    fn scroll_offset_sticks_to_bottom() {
        assert_eq!(scroll_offset(10, 20, 0), 0);
        assert_eq!(scroll_offset(50, 20, 0), 30);
        assert_eq!(scroll_offset(50, 20, 5), 25);
        assert_eq!(scroll_offset(50, 20, 100), 0);
    }

    #[test]
    fn max_scroll_tracks_transcript_height() {
        let area = Rect::new(0, 0, 60, 16);
        assert_eq!(max_scroll_from_bottom(area, &state_with(&[], false)), 0);

        let questions: Vec<String> = (0..10).map(|i| format!("question {i}")).collect();
        let asked: Vec<(&str, bool)> = questions.iter().map(|q| (q.as_str(), true)).collect();
        let state = state_with(&asked, false);
        let max = max_scroll_from_bottom(area, &state);
        assert!(max > 0);

        let transcript = layout_for(area, &state).transcript;
        let total = transcript_paragraph(&state).line_count(transcript.width);
        assert_eq!(scroll_offset(total, transcript.height, max), 0);
        assert_eq!(scroll_offset(total, transcript.height, max - 1), 1);
    }

    #[test]
    fn paging_down_after_overscrolling_moves_the_view() {
        let area = Rect::new(0, 0, 60, 16);
        let questions: Vec<String> = (0..10).map(|i| format!("question {i}")).collect();
        let asked: Vec<(&str, bool)> = questions.iter().map(|q| (q.as_str(), true)).collect();
        let mut state = state_with(&asked, false);
        state.set_max_scroll(max_scroll_from_bottom(area, &state));

        let transcript = layout_for(area, &state).transcript;
        let total = transcript_paragraph(&state).line_count(transcript.width);

        state.scroll_up(100);
        assert_eq!(scroll_offset(total, transcript.height, state.scroll_from_bottom), 0);
        state.scroll_down(1);
        assert_eq!(scroll_offset(total, transcript.height, state.scroll_from_bottom), 1);
    }
}
