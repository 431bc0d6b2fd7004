//! Ports - abstraction seams.
//!
//! Each trait hides an implementation detail behind an interface. The
//! host application wires concrete pieces together once and passes
//! them around by handle; there is no implicit global state.

pub mod clock;
pub mod id_generator;
pub mod store;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::store::TodoStore;
