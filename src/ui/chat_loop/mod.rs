//! Interactive chat loop.
//!
//! Polls terminal input, turns keys and clicks into session actions, and
//! runs each query on its own Tokio task. Outcomes come back over a channel
//! so that only the loop ever mutates the [`UiState`].

pub mod keybindings;
pub mod lifecycle;

use std::{error::Error, sync::Arc, time::Duration};

use ratatui::crossterm::event::{
    self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::api::{HttpBackend, QueryBackend};
use crate::core::chat::{ChatSession, QueryOutcome};
use crate::ui::renderer::{layout_for, max_scroll_from_bottom, ui};
use crate::ui::theme::Theme;
use crate::ui::ui_state::UiState;

use keybindings::{classify_key, KeyAction};
use lifecycle::{restore_terminal, setup_terminal, ChatTerminal};

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const WHEEL_SCROLL_LINES: u16 = 3;

pub struct ChatOptions {
    pub endpoint: String,
    pub greeting: String,
    pub sidebar: bool,
    pub theme: Theme,
}

pub async fn run_chat(options: ChatOptions) -> Result<(), Box<dyn Error>> {
    let ChatOptions {
        endpoint,
        greeting,
        sidebar,
        theme,
    } = options;

    let http = HttpBackend::new(endpoint);
    info!(endpoint = http.endpoint(), "starting chat session");
    let backend: Arc<dyn QueryBackend> = Arc::new(http);
    let mut state = UiState::new(ChatSession::new(greeting), theme, sidebar);

    let mut terminal_session = setup_terminal()?;
    let result = event_loop(&mut terminal_session.terminal, &mut state, backend).await;
    restore_terminal(&mut terminal_session)?;

    info!(messages = state.session.messages().len(), "chat session ended");
    result
}

/// What the loop should do after handling one event.
enum LoopControl {
    Continue,
    Quit,
}

async fn event_loop(
    terminal: &mut ChatTerminal,
    state: &mut UiState,
    backend: Arc<dyn QueryBackend>,
) -> Result<(), Box<dyn Error>> {
    let (tx, mut rx) = mpsc::unbounded_channel::<QueryOutcome>();

    loop {
        while let Ok(outcome) = rx.try_recv() {
            state.complete(outcome);
        }

        terminal.draw(|f| ui(f, state))?;
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        state.set_max_scroll(max_scroll_from_bottom(area, state));

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let query = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match handle_key_action(state, classify_key(&key), key) {
                    (LoopControl::Quit, _) => break,
                    (LoopControl::Continue, query) => query,
                }
            }
            Event::Mouse(mouse) => handle_mouse(state, mouse, area),
            Event::Paste(text) => {
                state.paste(&text);
                None
            }
            _ => None,
        };

        if let Some(query) = query {
            spawn_query(Arc::clone(&backend), query, tx.clone());
        }
    }

    Ok(())
}

fn handle_key_action(
    state: &mut UiState,
    action: KeyAction,
    key: event::KeyEvent,
) -> (LoopControl, Option<String>) {
    let query = match action {
        KeyAction::Quit => return (LoopControl::Quit, None),
        KeyAction::Submit => state.submit(),
        KeyAction::InsertNewline => {
            state.insert_newline();
            None
        }
        KeyAction::ScrollUp(lines) => {
            state.scroll_up(lines);
            None
        }
        KeyAction::ScrollDown(lines) => {
            state.scroll_down(lines);
            None
        }
        KeyAction::Edit => {
            state.apply_input(key);
            None
        }
    };
    (LoopControl::Continue, query)
}

fn handle_mouse(state: &mut UiState, mouse: MouseEvent, area: Rect) -> Option<String> {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.scroll_up(WHEEL_SCROLL_LINES);
            None
        }
        MouseEventKind::ScrollDown => {
            state.scroll_down(WHEEL_SCROLL_LINES);
            None
        }
        MouseEventKind::Down(MouseButton::Left) => {
            let layout = layout_for(area, state);
            state.click(mouse.column, mouse.row, &layout)
        }
        _ => None,
    }
}

/// Run one query in the background and report its outcome on `tx`.
pub fn spawn_query(
    backend: Arc<dyn QueryBackend>,
    query: String,
    tx: mpsc::UnboundedSender<QueryOutcome>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = backend.ask(&query).await;
        debug!(ok = outcome.is_ok(), "query finished");
        let _ = tx.send(outcome);
    })
}
