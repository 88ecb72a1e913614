//! `embedded-hal` SPI device adapter
//!
//! Wraps an `embedded_hal::spi::SpiDevice` (bus plus chip select) to implement
//! the `SpiInterface` trait. The HAL call blocks until its own completion
//! mechanism reports the transfer done, so no completion flag is needed here.

use crate::platform::{
    error::{PlatformError, SpiError},
    traits::{SpiConfig, SpiInterface},
    Result,
};
use embedded_hal::spi::{Error as _, ErrorKind, SpiDevice};

/// SPI device adapter
///
/// # Note
///
/// Mode and frequency are fixed when the HAL bus is constructed; `config`
/// only records what the bus was built with. `timeout_us` is not applied:
/// the HAL call returns when the HAL decides the transfer is done. Use
/// [`InterruptSpi`](crate::platform::irq_spi::InterruptSpi) where a stalled
/// bus must surface as `SpiError::Timeout`.
pub struct HalSpi<D> {
    device: D,
    config: SpiConfig,
}

impl<D: SpiDevice> HalSpi<D> {
    /// Wrap a configured SPI device
    ///
    /// # Arguments
    ///
    /// * `device` - HAL SPI device with chip select management
    /// * `config` - Settings the device's bus was built with
    pub fn new(device: D, config: SpiConfig) -> Self {
        Self { device, config }
    }

    /// Recover the wrapped device
    pub fn release(self) -> D {
        self.device
    }
}

fn map_error<E: embedded_hal::spi::Error>(error: E) -> PlatformError {
    let spi_error = match error.kind() {
        ErrorKind::Overrun => SpiError::Overrun,
        ErrorKind::ModeFault => SpiError::ModeFault,
        _ => SpiError::TransferFailed,
    };
    PlatformError::Spi(spi_error)
}

impl<D: SpiDevice> SpiInterface for HalSpi<D> {
    fn transfer(&mut self, write_buffer: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        if write_buffer.len() != read_buffer.len() {
            return Err(PlatformError::Spi(SpiError::LengthMismatch));
        }

        self.device
            .transfer(read_buffer, write_buffer)
            .map_err(map_error)
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.device.write(data).map_err(map_error)
    }

    fn config(&self) -> SpiConfig {
        self.config
    }
}
