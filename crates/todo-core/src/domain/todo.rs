//! The todo record.

use serde::{Deserialize, Serialize};

use super::TodoId;

/// A single to-do record.
///
/// Wire shape: `{"id": <string>, "message": <string>, "complete": <bool>}`.
/// `id` and `message` are fixed at creation; `complete` is the only
/// field that ever changes in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub message: String,
    pub complete: bool,
}

impl Todo {
    /// Create an open (not yet completed) todo.
    pub fn new(id: TodoId, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
            complete: false,
        }
    }

    /// Mark as completed.
    pub fn mark_complete(&mut self) {
        self.complete = true;
    }
}
