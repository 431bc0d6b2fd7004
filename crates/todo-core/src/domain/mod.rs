//! Domain model (ids, records).

pub mod ids;
pub mod todo;

pub use self::ids::TodoId;
pub use self::todo::Todo;
