use serde::{Deserialize, Serialize};

/// Hands out stacking numbers. Every raise yields a value strictly larger than
/// any handed out before, so two windows can never tie.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZOrderAllocator {
    current: u32,
}

impl Default for ZOrderAllocator {
    // Every window starts at 1, so the first raise lands above all of them.
    fn default() -> Self {
        Self { current: 1 }
    }
}

impl ZOrderAllocator {
    /// Increment the counter and return the new maximum.
    pub fn bring_to_front(&mut self) -> u32 {
        self.current += 1;
        self.current
    }

    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }
}
