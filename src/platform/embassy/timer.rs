//! Timer backed by the `embassy-time` driver

use crate::platform::{traits::TimerInterface, Result};
use embassy_time::{block_for, Duration, Instant};

/// Blocking timer over the embassy time driver
///
/// Delays spin on `embassy_time::block_for`; the lock's control loop is
/// synchronous, so no executor is required.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyTimer;

impl EmbassyTimer {
    pub const fn new() -> Self {
        Self
    }
}

impl TimerInterface for EmbassyTimer {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        block_for(Duration::from_micros(us as u64));
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        block_for(Duration::from_millis(ms as u64));
        Ok(())
    }

    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }

    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
