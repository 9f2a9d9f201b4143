//! The chat session: transcript, input buffer, and request lifecycle.

use tracing::{info, warn};

use crate::api::{QueryBackend, RequestError};
use crate::core::constants::{DEFAULT_GREETING, NO_ANSWER_TEXT, REQUEST_FAILED_TEXT};
use crate::core::message::Message;

/// Result of one request as seen by the session.
pub type QueryOutcome = Result<Option<String>, RequestError>;

#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<Message>,
    input: String,
    loading: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(DEFAULT_GREETING)
    }
}

impl ChatSession {
    /// Start a session whose transcript opens with `greeting` from the bot.
    /// An empty greeting starts with an empty transcript.
    pub fn new(greeting: impl Into<String>) -> Self {
        let greeting = greeting.into();
        let messages = if greeting.is_empty() {
            Vec::new()
        } else {
            vec![Message::bot(greeting)]
        };
        Self {
            messages,
            input: String::new(),
            loading: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the send button accepts clicks.
    pub fn can_click_send(&self) -> bool {
        !self.loading
    }

    /// Move the input into the transcript and mark the session as loading.
    ///
    /// Returns the query to send, or `None` when the input is blank, in which
    /// case nothing changes.
    pub fn begin_send(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }

        let query = std::mem::take(&mut self.input);
        self.messages.push(Message::user(query.clone()));
        self.loading = true;
        info!(query_len = query.len(), "query submitted");
        Some(query)
    }

    /// Record the outcome of a request started by [`begin_send`](Self::begin_send).
    pub fn complete(&mut self, outcome: QueryOutcome) {
        let text = match outcome {
            Ok(Some(answer)) => answer,
            Ok(None) => {
                info!("response carried no answer");
                NO_ANSWER_TEXT.to_string()
            }
            Err(err) => {
                warn!(error = %err, "query failed");
                REQUEST_FAILED_TEXT.to_string()
            }
        };
        self.messages.push(Message::bot(text));
        self.loading = false;
    }

    /// Send the current input through `backend` and wait for the answer.
    ///
    /// Returns `None` without touching the backend when the input is blank,
    /// otherwise whether the request succeeded.
    pub async fn send_message<B>(&mut self, backend: &B) -> Option<bool>
    where
        B: QueryBackend + ?Sized,
    {
        let query = self.begin_send()?;
        let outcome = backend.ask(&query).await;
        let succeeded = outcome.is_ok();
        self.complete(outcome);
        Some(succeeded)
    }
}
