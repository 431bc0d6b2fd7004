//! TodoStore port - the seam between the store and its callers.

use async_trait::async_trait;

use crate::domain::{Todo, TodoId};
use crate::error::TodoError;
use crate::store::TodoCounts;

/// Concurrency-safe access to the ordered todo sequence.
///
/// Design intent:
/// - The host application instantiates one implementation and hands
///   it to callers by `Arc`; the store itself is not a singleton.
/// - A presentation layer (e.g. HTTP) maps [`TodoError::NotFound`] to
///   its own not-found response; the store does no retries and no
///   logging.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Snapshot of the full sequence, insertion order preserved.
    async fn list(&self) -> Vec<Todo>;

    /// Append a new open todo and return its freshly generated id.
    /// Cannot fail; unbounded growth is accepted.
    async fn add(&self, message: String) -> TodoId;

    /// Mark the matching todo complete, in place.
    async fn complete(&self, id: TodoId) -> Result<(), TodoError>;

    /// Remove the matching todo, preserving the order of the rest.
    async fn delete(&self, id: TodoId) -> Result<(), TodoError>;

    /// Observability hook: open/complete/total counts.
    async fn counts(&self) -> TodoCounts;
}
