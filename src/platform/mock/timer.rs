//! Mock Timer implementation for testing

use crate::platform::{traits::TimerInterface, Result};
use core::cell::Cell;
use std::rc::Rc;

/// Mock Timer implementation
///
/// Uses simulated time: delays advance the clock instantly. Clones share
/// the same clock, so a driver and a controller built from one mock
/// platform observe the same elapsed time.
#[derive(Debug, Clone, Default)]
pub struct MockTimer {
    now_us: Rc<Cell<u64>>,
}

impl MockTimer {
    /// Create a new mock timer starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward without a delay call
    pub fn advance(&self, us: u64) {
        self.now_us.set(self.now_us.get().wrapping_add(us));
    }
}

impl TimerInterface for MockTimer {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        self.advance(us as u64);
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.delay_us(ms.saturating_mul(1000))
    }

    fn now_us(&self) -> u64 {
        self.now_us.get()
    }
}
