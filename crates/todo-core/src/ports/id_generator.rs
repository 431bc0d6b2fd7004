//! IdGenerator port - id generation abstraction.

use ulid::Ulid;

use crate::domain::TodoId;
use crate::ports::Clock;

/// Generates identifiers that are unique without coordination.
///
/// `Send + Sync` so one generator can serve concurrent callers.
pub trait IdGenerator: Send + Sync {
    /// Generate a fresh [`TodoId`].
    fn generate_todo_id(&self) -> TodoId;
}

/// ULID-based id generator.
///
/// Builds ids from the clock's timestamp plus random entropy, so ids
/// sort by creation time and a `FixedClock` pins the timestamp part
/// in tests.
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_todo_id(&self) -> TodoId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        TodoId::from(ulid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FixedClock, SystemClock};
    use chrono::{TimeZone, Utc};

    #[test]
    fn generates_unique_ids() {
        let id_gen = UlidGenerator::new(SystemClock);

        let id1 = id_gen.generate_todo_id();
        let id2 = id_gen.generate_todo_id();
        let id3 = id_gen.generate_todo_id();

        assert_ne!(id1, id2);
        assert_ne!(id2, id3);
        assert_ne!(id1, id3);
    }

    #[test]
    fn fixed_clock_pins_the_timestamp_part() {
        let fixed_time = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let id_gen = UlidGenerator::new(FixedClock::new(fixed_time));

        let id1 = id_gen.generate_todo_id();
        let id2 = id_gen.generate_todo_id();

        // Random part still differs.
        assert_ne!(id1, id2);

        // Timestamp part comes from the clock.
        let expected_ms = fixed_time.timestamp_millis() as u64;
        assert_eq!(id1.as_ulid().timestamp_ms(), expected_ms);
        assert_eq!(id2.as_ulid().timestamp_ms(), expected_ms);
    }

    #[test]
    fn ids_sort_by_generation_time() {
        let earlier = UlidGenerator::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        ));
        let later = UlidGenerator::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        ));

        assert!(earlier.generate_todo_id() < later.generate_todo_id());
    }
}
