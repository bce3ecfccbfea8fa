use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use crate::backend::IdeaBackend;
use crate::errors::AppError;
use crate::models::{ChatMessage, ChatRequest, Idea};

/// Assistant text appended when the backend answered but sent no usable
/// reply. A soft outcome, not an error: the transport did its job.
pub const NO_REPLY_TEXT: &str = "No reply received.";

/// Assistant text appended when the backend could not be reached.
pub const NETWORK_ERROR_TEXT: &str = "Network error: could not reach backend.";

/// Follow-up chat session scoped to one idea's detail view.
///
/// The message log is append-only; no outcome ever replaces or removes a
/// prior entry. `ask` takes `&mut self`, so one question per session is in
/// flight at a time by construction.
pub struct ChatBridge {
    backend: Arc<dyn IdeaBackend>,
    idea: Idea,
    messages: Vec<ChatMessage>,
}

impl ChatBridge {
    pub fn new(backend: Arc<dyn IdeaBackend>, idea: Idea) -> Self {
        Self { backend, idea, messages: Vec::new() }
    }

    pub fn idea(&self) -> &Idea {
        &self.idea
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Sends one follow-up question about this session's idea and returns the
    /// assistant-side entry appended for it. Blank questions are ignored.
    ///
    /// The user's question is echoed into the log before the request is
    /// issued, so it is visible whatever the outcome.
    pub async fn ask(&mut self, question: &str) -> Option<&ChatMessage> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::user(question));

        let request = ChatRequest {
            idea: self.idea.clone(),
            question: question.to_string(),
        };
        let text = match self.backend.ask(&request).await {
            Ok(payload) => match payload
                .get("reply")
                .and_then(Value::as_str)
                .filter(|reply| !reply.is_empty())
            {
                Some(reply) => reply.to_string(),
                None => NO_REPLY_TEXT.to_string(),
            },
            Err(AppError::BackendStatus { status }) => format!("Server error: {status}"),
            Err(error) => {
                warn!("Chat request failed: {error}");
                NETWORK_ERROR_TEXT.to_string()
            }
        };

        self.messages.push(ChatMessage::assistant(text));
        self.messages.last()
    }
}
