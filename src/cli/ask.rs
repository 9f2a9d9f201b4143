//! TUI-less "ask" command

use std::error::Error;
use std::io::Write;

use crate::api::QueryBackend;
use crate::core::chat::ChatSession;
use crate::ui::bot_text::{render_bot_text, to_plain_text};

/// Send one query and print the formatted answer to `out`.
///
/// Returns `Ok(false)` when the request failed; the fixed error text is
/// printed either way.
pub async fn run_ask<B, W>(words: &[String], backend: &B, out: &mut W) -> Result<bool, Box<dyn Error>>
where
    B: QueryBackend + ?Sized,
    W: Write,
{
    let mut session = ChatSession::new("");
    session.set_input(words.join(" "));

    let Some(succeeded) = session.send_message(backend).await else {
        return Err("Usage: intellicourse ask <question>".into());
    };

    if let Some(answer) = session.messages().last() {
        writeln!(out, "{}", to_plain_text(&render_bot_text(&answer.text)))?;
    }
    Ok(succeeded)
}
