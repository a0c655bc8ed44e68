//! Stacking-order allocation.

/// Hands out monotonically increasing stacking values for the canvas.
///
/// The counter is passed explicitly to interaction code instead of living
/// in a global, so tests can construct and reset their own instance. Values
/// only grow for the life of a session; there is no reuse or compaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZOrderCounter {
    current: u64,
}

impl ZOrderCounter {
    /// Create a counter at its starting value of 1.
    pub fn new() -> Self {
        Self { current: 1 }
    }

    /// Increment and return the new top-most stacking value.
    pub fn next_z(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    /// The current top value, without allocating a new one.
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Reset to the starting value.
    pub fn reset(&mut self) {
        self.current = 1;
    }
}

impl Default for ZOrderCounter {
    fn default() -> Self {
        Self::new()
    }
}
