//! Transfer completion signalling
//!
//! The SPI peripheral reports the end of a transfer from interrupt context.
//! The only state shared with that context is a single atomic flag: the
//! interrupt handler calls [`CompletionFlag::signal`], the issuing context
//! resets the flag before starting a transfer and then blocks in
//! [`CompletionFlag::wait`].
//!
//! ```ignore
//! static SPI_DONE: CompletionFlag = CompletionFlag::new();
//!
//! #[interrupt]
//! fn SPI0_IRQ() {
//!     SPI_DONE.signal();
//! }
//! ```

use crate::platform::error::{PlatformError, SpiError};
use crate::platform::traits::TimerInterface;
use crate::platform::Result;
use core::sync::atomic::{AtomicBool, Ordering};

/// Interval between flag checks while waiting
pub const POLL_INTERVAL_US: u32 = 10;

/// One-shot "transfer done" flag shared with an interrupt handler
#[derive(Debug, Default)]
pub struct CompletionFlag {
    done: AtomicBool,
}

impl CompletionFlag {
    pub const fn new() -> Self {
        Self {
            done: AtomicBool::new(false),
        }
    }

    /// Mark the in-flight transfer complete (interrupt context)
    pub fn signal(&self) {
        self.done.store(true, Ordering::Release);
    }

    /// Clear the flag before issuing a transfer
    pub fn reset(&self) {
        self.done.store(false, Ordering::Release);
    }

    pub fn is_signaled(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }

    /// Block until the flag is signalled
    ///
    /// With `timeout_us = None` this waits forever. Otherwise it gives up
    /// with `SpiError::Timeout` once `timeout_us` has elapsed on `timer`.
    pub fn wait<T: TimerInterface>(&self, timer: &mut T, timeout_us: Option<u32>) -> Result<()> {
        let start = timer.now_us();

        loop {
            if self.is_signaled() {
                return Ok(());
            }

            if let Some(limit) = timeout_us {
                if timer.now_us().saturating_sub(start) >= limit as u64 {
                    return Err(PlatformError::Spi(SpiError::Timeout));
                }
            }

            timer.delay_us(POLL_INTERVAL_US)?;
        }
    }
}
