//! Timer interface trait
//!
//! Blocking delays and a monotonic microsecond clock.

use crate::platform::Result;

/// Timer interface trait
///
/// The clock starts at an arbitrary origin and never goes backwards.
/// Delays block the calling context; the only other context in the system
/// is the transfer-complete interrupt, which never touches the timer.
pub trait TimerInterface {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32) -> Result<()>;

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) -> Result<()>;

    /// Microseconds since the timer's origin
    fn now_us(&self) -> u64;

    /// Milliseconds since the timer's origin
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }
}
