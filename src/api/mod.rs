//! Wire payloads exchanged with the answering service and the HTTP client
//! that carries them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod client;

pub use client::{HttpBackend, QueryBackend, RequestError};

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub query: &'a str,
}

/// Response body of the answering service.
///
/// `answer` is kept as a raw JSON value: anything other than a non-empty
/// string counts as "no answer" rather than a malformed response.
#[derive(Debug, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub answer: Option<Value>,
}

impl ChatResponse {
    pub fn answer_text(&self) -> Option<&str> {
        match self.answer.as_ref()? {
            Value::String(text) if !text.is_empty() => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Decode a response body. Any valid JSON document is accepted; a document
/// without an object-level `answer` simply has no answer.
pub fn parse_response(body: &[u8]) -> Result<ChatResponse, serde_json::Error> {
    let value: Value = serde_json::from_slice(body)?;
    match value {
        Value::Object(_) => serde_json::from_value(value),
        _ => Ok(ChatResponse::default()),
    }
}
