//! Point identifier generation.

use chrono::Utc;

/// Generates session-unique point identifiers.
///
/// Ids combine a coarse wall-clock timestamp with a strictly increasing
/// counter, so points detected within the same millisecond still get
/// distinct ids. A fresh generator is created per scan, resetting the
/// counter.
#[derive(Debug, Default)]
pub struct PointIdGenerator {
    counter: u64,
}

impl PointIdGenerator {
    /// Creates a generator with its counter at zero.
    pub fn new() -> Self {
        Self { counter: 0 }
    }

    /// Returns the next identifier, e.g. `fp-1754500000000-0`.
    pub fn next_id(&mut self) -> String {
        let id = format!("fp-{}-{}", Utc::now().timestamp_millis(), self.counter);
        self.counter += 1;
        id
    }
}
