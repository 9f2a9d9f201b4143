use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::api::{QueryBackend, RequestError};

#[derive(Clone, Copy, Debug)]
pub enum ScriptedReply {
    Answer(&'static str),
    NoAnswer,
    Fail,
}

/// Backend that replays canned replies in order and records every query.
/// Running out of replies counts as a failure.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<ScriptedReply>>,
    queries: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new(replies: impl IntoIterator<Item = ScriptedReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryBackend for ScriptedBackend {
    async fn ask(&self, query: &str) -> Result<Option<String>, RequestError> {
        self.queries.lock().unwrap().push(query.to_string());
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(ScriptedReply::Answer(text)) => Ok(Some(text.to_string())),
            Some(ScriptedReply::NoAnswer) => Ok(None),
            Some(ScriptedReply::Fail) | None => {
                Err(RequestError::Status(StatusCode::SERVICE_UNAVAILABLE))
            }
        }
    }
}
