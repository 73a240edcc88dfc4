//! Chat widget state: the transcript and the pending-reply flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use cbc_core::{ChatMessageId, ChatSender};

/// Errors the chat widget reports back to the shopper.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    /// Blank input; the send button is disabled for this in the UI.
    #[error("message is empty")]
    EmptyMessage,

    /// A reply is still being "typed"; input is rejected until it lands.
    #[error("a reply is already pending")]
    ReplyPending,
}

/// One entry in the transcript. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Monotonic within the session.
    pub id: ChatMessageId,
    pub content: String,
    pub sender: ChatSender,
    pub timestamp: DateTime<Utc>,
}

/// One shopper's conversation with the assistant.
///
/// The transcript is append-only; messages are never edited or removed.
/// At most one bot reply is outstanding at a time: `submit` sets the
/// pending flag and further submissions are rejected until the reply is
/// appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    next_id: ChatMessageId,
    awaiting_reply: bool,
}

impl ChatSession {
    /// Open a session seeded with the assistant's greeting.
    #[must_use]
    pub fn new(greeting: impl Into<String>) -> Self {
        let mut session = Self {
            messages: Vec::new(),
            next_id: ChatMessageId::new(1),
            awaiting_reply: false,
        };
        session.push(greeting.into(), ChatSender::Bot);
        session
    }

    fn push(&mut self, content: String, sender: ChatSender) -> &ChatMessage {
        let message = ChatMessage {
            id: self.next_id,
            content,
            sender,
            timestamp: Utc::now(),
        };
        self.next_id = self.next_id.next();
        self.messages.push(message);
        self.messages.last().expect("message was just pushed")
    }

    /// Record a shopper message and arm the pending-reply flag.
    ///
    /// # Errors
    ///
    /// - `ChatError::EmptyMessage` for blank input
    /// - `ChatError::ReplyPending` while a reply is outstanding
    pub fn submit(&mut self, text: &str) -> Result<ChatMessageId, ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if self.awaiting_reply {
            return Err(ChatError::ReplyPending);
        }
        self.awaiting_reply = true;
        Ok(self.push(text.to_string(), ChatSender::User).id)
    }

    /// Append the assistant's reply and clear the pending flag.
    pub fn push_bot_reply(&mut self, content: impl Into<String>) -> &ChatMessage {
        self.awaiting_reply = false;
        self.push(content.into(), ChatSender::Bot)
    }

    /// The full transcript, oldest first.
    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether the assistant still owes a reply.
    #[must_use]
    pub const fn awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }
}
