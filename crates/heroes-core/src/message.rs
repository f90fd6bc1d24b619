// ── Message log ──
//
// Append-only record of operation outcomes, shown to the user.
// The composition root creates one `MessageLog` and hands clones of the
// handle to every component that reports outcomes.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;

const MESSAGE_CHANNEL_SIZE: usize = 256;

/// One entry in the message log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Component that reported the outcome (e.g. `HeroService`).
    pub source: String,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.text)
    }
}

/// Shared handle to the append-only message log.
///
/// Cheaply cloneable; every clone appends to the same sequence. New
/// messages are also broadcast to live subscribers.
#[derive(Clone)]
pub struct MessageLog {
    inner: Arc<MessageLogInner>,
}

struct MessageLogInner {
    entries: RwLock<Vec<Arc<Message>>>,
    tx: broadcast::Sender<Arc<Message>>,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MessageLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageLog")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl MessageLog {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(MESSAGE_CHANNEL_SIZE);
        Self {
            inner: Arc::new(MessageLogInner {
                entries: RwLock::new(Vec::new()),
                tx,
            }),
        }
    }

    /// Append a message and notify subscribers.
    pub fn add(&self, source: &str, text: impl Into<String>) -> Arc<Message> {
        let message = Arc::new(Message {
            source: source.to_owned(),
            text: text.into(),
            at: Utc::now(),
        });

        self.inner
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::clone(&message));

        // No subscribers is fine.
        let _ = self.inner.tx.send(Arc::clone(&message));
        message
    }

    /// Snapshot of every message, oldest first.
    pub fn entries(&self) -> Vec<Arc<Message>> {
        self.inner
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Snapshot of the message texts only, oldest first.
    pub fn texts(&self) -> Vec<String> {
        self.inner
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|m| m.text.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Receive messages added after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<Message>> {
        self.inner.tx.subscribe()
    }
}
