//! Session struct and conversation history.

use crate::token_tracker::TokenTracker;
use crate::{Message, Role};

/// A conversation session with message history.
pub struct Session {
    /// Completed turns, oldest first.
    pub(super) messages: Vec<Message>,
    /// System prompt (prepended to every API call).
    pub(super) system_prompt: Option<String>,
    /// Token usage tracker.
    pub(super) tracker: TokenTracker,
    /// Provider name, used in log fields.
    pub(super) provider: String,
}

impl Session {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            messages: Vec::new(),
            system_prompt: None,
            tracker: TokenTracker::new(),
            provider: provider.into(),
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Messages for the next request: system prompt, history, then `pending`.
    pub(crate) fn build_messages(&self, pending: &Message) -> Vec<Message> {
        let mut msgs = Vec::with_capacity(self.messages.len() + 2);
        if let Some(ref system) = self.system_prompt {
            msgs.push(Message {
                role: Role::System,
                content: system.clone(),
            });
        }
        msgs.extend(self.messages.iter().cloned());
        msgs.push(pending.clone());
        msgs
    }

    /// Get the full conversation history.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Get the token tracker.
    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    /// Number of completed turns (user message plus reply).
    pub fn turn_count(&self) -> usize {
        self.messages.len() / 2
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new("default")
    }
}
