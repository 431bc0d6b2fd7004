//! In-memory store implementation.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Todo, TodoId};
use crate::error::TodoError;
use crate::ports::{IdGenerator, SystemClock, TodoStore, UlidGenerator};
use crate::store::TodoCounts;

/// In-memory, lock-guarded ordered sequence of todos.
///
/// Locking discipline:
/// - `list` / `counts` take the read lock; readers run in parallel.
/// - `add` / `complete` / `delete` take the write lock once and do
///   lookup and mutation inside that single critical section, so a
///   concurrent delete can never invalidate a found position.
/// - No await happens while a guard is held; every critical section
///   is short and non-suspending.
pub struct InMemoryStore {
    todos: RwLock<Vec<Todo>>,
    ids: Box<dyn IdGenerator>,
}

impl InMemoryStore {
    /// Empty store with system-clock ULID ids.
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(UlidGenerator::new(SystemClock)))
    }

    /// Empty store with an injected id generator (deterministic tests).
    pub fn with_id_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            todos: RwLock::new(Vec::new()),
            ids,
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoStore for InMemoryStore {
    async fn list(&self) -> Vec<Todo> {
        let todos = self.todos.read().await;
        todos.clone()
    }

    async fn add(&self, message: String) -> TodoId {
        let todo = Todo::new(self.ids.generate_todo_id(), message);
        let id = todo.id;
        let mut todos = self.todos.write().await;
        todos.push(todo);
        id
    }

    async fn complete(&self, id: TodoId) -> Result<(), TodoError> {
        let mut todos = self.todos.write().await;
        match todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.mark_complete();
                Ok(())
            }
            None => Err(TodoError::NotFound(id)),
        }
    }

    async fn delete(&self, id: TodoId) -> Result<(), TodoError> {
        let mut todos = self.todos.write().await;
        match todos.iter().position(|t| t.id == id) {
            Some(location) => {
                todos.remove(location);
                Ok(())
            }
            None => Err(TodoError::NotFound(id)),
        }
    }

    async fn counts(&self) -> TodoCounts {
        let todos = self.todos.read().await;
        let complete = todos.iter().filter(|t| t.complete).count();
        TodoCounts {
            open: todos.len() - complete,
            complete,
            total: todos.len(),
        }
    }
}
