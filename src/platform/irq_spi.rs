//! Interrupt-completed SPI backend
//!
//! For peripherals driven directly rather than through a blocking HAL call.
//! The exchange is started, the interrupt handler signals a shared
//! [`CompletionFlag`], and the issuing context waits on that flag for at
//! most `SpiConfig::timeout_us`. A stuck exchange is cancelled and reported
//! as `SpiError::Timeout`.
//!
//! ```ignore
//! static SPI_DONE: CompletionFlag = CompletionFlag::new();
//!
//! #[interrupt]
//! fn SPI0_IRQ() {
//!     SPI_DONE.signal();
//! }
//!
//! let spi = InterruptSpi::new(peripheral, timer, &SPI_DONE, SpiConfig::default());
//! ```

use crate::platform::completion::CompletionFlag;
use crate::platform::error::{PlatformError, SpiError};
use crate::platform::traits::{SpiConfig, SpiInterface, TimerInterface};
use crate::platform::Result;

/// Register-level access to an SPI peripheral
///
/// `begin` only starts the exchange. Completion is reported from the
/// peripheral's interrupt through the flag handed to [`InterruptSpi`].
pub trait SpiPeripheral {
    /// Start clocking out `write`, capturing the same number of bytes
    fn begin(&mut self, write: &[u8]) -> Result<()>;

    /// Copy the bytes received by the last completed exchange
    fn collect(&mut self, read: &mut [u8]) -> Result<()>;

    /// Abort an exchange that never completed
    fn cancel(&mut self);
}

/// `SpiInterface` over an interrupt-completed peripheral
pub struct InterruptSpi<'a, P, T> {
    peripheral: P,
    timer: T,
    done: &'a CompletionFlag,
    config: SpiConfig,
}

impl<'a, P: SpiPeripheral, T: TimerInterface> InterruptSpi<'a, P, T> {
    /// # Arguments
    ///
    /// * `peripheral` - Configured SPI peripheral
    /// * `timer` - Time source for the bounded wait
    /// * `done` - Flag signalled by the peripheral's interrupt handler
    /// * `config` - Settings the peripheral was built with
    pub fn new(peripheral: P, timer: T, done: &'a CompletionFlag, config: SpiConfig) -> Self {
        Self {
            peripheral,
            timer,
            done,
            config,
        }
    }

    pub fn peripheral(&self) -> &P {
        &self.peripheral
    }

    /// Recover the peripheral and timer
    pub fn release(self) -> (P, T) {
        (self.peripheral, self.timer)
    }

    fn exchange(&mut self, write: &[u8]) -> Result<()> {
        self.done.reset();
        self.peripheral.begin(write)?;

        if let Err(e) = self.done.wait(&mut self.timer, self.config.timeout_us) {
            self.peripheral.cancel();
            crate::log_warn!("SPI exchange did not complete");
            return Err(e);
        }
        Ok(())
    }
}

impl<P: SpiPeripheral, T: TimerInterface> SpiInterface for InterruptSpi<'_, P, T> {
    fn transfer(&mut self, write_buffer: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        if write_buffer.len() != read_buffer.len() {
            return Err(PlatformError::Spi(SpiError::LengthMismatch));
        }

        self.exchange(write_buffer)?;
        self.peripheral.collect(read_buffer)
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.exchange(data)
    }

    fn config(&self) -> SpiConfig {
        self.config
    }
}
