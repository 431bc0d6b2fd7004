//! Store module: in-memory implementation and its counts view.

mod counts;
mod memory;

pub use counts::TodoCounts;
pub use memory::InMemoryStore;
