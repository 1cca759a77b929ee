//! # Outgoing Message Queue
//!
//! Messages the user has sent but the backend has not yet confirmed. Entries
//! are keyed by their idempotency nonce; a retry re-sends with the original
//! nonce so the backend can deduplicate, and a cancel discards the entry
//! without any network call.

use crate::identifiers::{ChannelId, MessageId, MessageNonce};
use serde::{Deserialize, Serialize};

/// Delivery state of a queued entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QueueStatus {
    /// Send in flight, awaiting confirmation
    #[default]
    Sending,
    /// Send rejected; retained so the user can retry or cancel
    Failed {
        /// Normalized error description from the failed attempt
        error: String,
    },
}

impl QueueStatus {
    /// Whether the entry failed to send
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// A reply reference carried by an outgoing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyIntent {
    /// Message being replied to
    pub id: MessageId,
    /// Whether the reply pings its author
    pub mention: bool,
}

/// A locally buffered outgoing message awaiting confirmed delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedMessage {
    /// Idempotency token; also the queue key
    pub nonce: MessageNonce,
    /// Target channel
    pub channel: ChannelId,
    /// Message content as typed
    pub content: String,
    /// Reply references from the compose box
    #[serde(default)]
    pub replies: Vec<ReplyIntent>,
    /// Current delivery state
    #[serde(default)]
    pub status: QueueStatus,
}

/// The per-session queue of unconfirmed outgoing messages.
///
/// Entries appear when a send is initiated, flip to `Failed` when the send
/// rejects, back to `Sending` on retry, and disappear once the backend
/// confirms delivery (or the user cancels).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageQueue {
    entries: Vec<QueuedMessage>,
}

impl MessageQueue {
    /// Create an empty queue
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[QueuedMessage] {
        &self.entries
    }

    /// Look up an entry by nonce
    #[must_use]
    pub fn get(&self, nonce: &MessageNonce) -> Option<&QueuedMessage> {
        self.entries.iter().find(|entry| entry.nonce == *nonce)
    }

    /// Add an entry (replacing any stale entry with the same nonce)
    pub fn push(&mut self, message: QueuedMessage) {
        self.entries.retain(|entry| entry.nonce != message.nonce);
        self.entries.push(message);
    }

    /// Mark an entry as in flight again (retry path).
    ///
    /// Returns false if the nonce is unknown.
    pub fn start(&mut self, nonce: &MessageNonce) -> bool {
        match self.entries.iter_mut().find(|entry| entry.nonce == *nonce) {
            Some(entry) => {
                entry.status = QueueStatus::Sending;
                true
            }
            None => false,
        }
    }

    /// Mark an entry as failed, retaining the error text for display.
    ///
    /// Returns false if the nonce is unknown.
    pub fn fail(&mut self, nonce: &MessageNonce, error: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|entry| entry.nonce == *nonce) {
            Some(entry) => {
                entry.status = QueueStatus::Failed {
                    error: error.into(),
                };
                true
            }
            None => false,
        }
    }

    /// Remove an entry (confirmed delivery or user cancel)
    pub fn remove(&mut self, nonce: &MessageNonce) {
        self.entries.retain(|entry| entry.nonce != *nonce);
    }

    /// Number of queued entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(nonce: &str) -> QueuedMessage {
        QueuedMessage {
            nonce: MessageNonce::new(nonce),
            channel: ChannelId::new("ch"),
            content: "hello".into(),
            replies: Vec::new(),
            status: QueueStatus::Sending,
        }
    }

    #[test]
    fn test_fail_then_start_roundtrip() {
        let mut queue = MessageQueue::new();
        queue.push(entry("n1"));

        let nonce = MessageNonce::new("n1");
        assert!(queue.fail(&nonce, "Network error: timeout"));
        assert!(queue.get(&nonce).unwrap().status.is_failed());

        assert!(queue.start(&nonce));
        assert_eq!(queue.get(&nonce).unwrap().status, QueueStatus::Sending);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut queue = MessageQueue::new();
        queue.push(entry("n1"));
        let nonce = MessageNonce::new("n1");
        queue.remove(&nonce);
        queue.remove(&nonce);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_unknown_nonce_is_a_no_op() {
        let mut queue = MessageQueue::new();
        assert!(!queue.start(&MessageNonce::new("missing")));
        assert!(!queue.fail(&MessageNonce::new("missing"), "err"));
    }

    #[test]
    fn test_push_replaces_same_nonce() {
        let mut queue = MessageQueue::new();
        queue.push(entry("n1"));
        let mut replacement = entry("n1");
        replacement.content = "edited".into();
        queue.push(replacement);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.get(&MessageNonce::new("n1")).unwrap().content, "edited");
    }
}
