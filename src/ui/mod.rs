//! Terminal UI layer for the chat session.
//!
//! - [`chat_loop`]: the interaction loop that turns input into session
//!   actions and runs queries in the background.
//! - [`renderer`] and [`layout`]: frame composition and screen geometry.
//! - [`bot_text`]: paragraph / list formatting of bot answers.
//! - [`ui_state`]: the input textarea and scroll position around a
//!   [`crate::core::chat::ChatSession`].

pub mod bot_text;
pub mod chat_loop;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod ui_state;
