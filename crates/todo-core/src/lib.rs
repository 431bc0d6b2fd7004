//! todo-core
//!
//! In-memory backing store for a to-do style application.
//!
//! # Module layout
//! - **domain**: the `Todo` record and its `TodoId`
//! - **ports**: abstraction seams (`TodoStore`, `IdGenerator`, `Clock`)
//! - **store**: in-memory implementation (`InMemoryStore`) and counts view
//! - **error**: error type

pub mod domain;
pub mod error;
pub mod ports;
pub mod store;

pub use domain::{Todo, TodoId};
pub use error::TodoError;
pub use ports::TodoStore;
pub use store::{InMemoryStore, TodoCounts};
