use std::{error::Error, io};

use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::Terminal;
use tracing::debug;

pub type ChatTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Terminal plus the modes that were switched on for it.
pub struct TerminalSession {
    pub terminal: ChatTerminal,
    keyboard_enhanced: bool,
}

/// Enter raw mode and the alternate screen. Shift+Enter is only reported by
/// terminals that accept the keyboard enhancement protocol.
pub fn setup_terminal() -> Result<TerminalSession, Box<dyn Error>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    if let Err(err) = execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    ) {
        reset_modes(&mut stdout, false);
        return Err(err.into());
    }

    let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false)
        && execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )
        .is_ok();
    debug!(keyboard_enhanced, "terminal ready");

    let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(err) => {
            reset_modes(&mut io::stdout(), keyboard_enhanced);
            return Err(err.into());
        }
    };

    Ok(TerminalSession {
        terminal,
        keyboard_enhanced,
    })
}

/// Best-effort undo of everything `setup_terminal` may have switched on.
fn reset_modes<W: io::Write>(out: &mut W, keyboard_enhanced: bool) {
    if keyboard_enhanced {
        let _ = execute!(out, PopKeyboardEnhancementFlags);
    }
    let _ = execute!(
        out,
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    );
    let _ = disable_raw_mode();
}

pub fn restore_terminal(session: &mut TerminalSession) -> Result<(), Box<dyn Error>> {
    disable_raw_mode()?;
    let backend = session.terminal.backend_mut();
    if session.keyboard_enhanced {
        execute!(backend, PopKeyboardEnhancementFlags)?;
    }
    execute!(
        backend,
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    session.terminal.show_cursor()?;
    Ok(())
}
