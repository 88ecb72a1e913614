//! Root platform trait
//!
//! Aggregates the peripherals the gesture lock needs from a board.

use super::{SpiConfig, SpiInterface, TimerInterface};
use crate::platform::Result;

/// Root platform trait
///
/// Platform implementations provide concrete peripheral types via associated
/// types, so drivers built on top are monomorphized per board.
///
/// # Example
///
/// ```ignore
/// let mut platform = MockPlatform::init()?;
/// let spi = platform.create_spi(0, SpiConfig::default())?;
/// let timer = platform.create_timer()?;
/// let gyro = L3gd20Driver::new(spi, GyroConfig::default());
/// ```
pub trait Platform: Sized {
    /// SPI peripheral type
    type Spi: SpiInterface;

    /// Timer peripheral type
    type Timer: TimerInterface;

    /// Initialize the platform
    fn init() -> Result<Self>;

    /// Create an SPI peripheral instance
    ///
    /// # Arguments
    ///
    /// * `spi_id` - Platform-specific SPI identifier (e.g., 0 for SPI0, 1 for SPI1)
    /// * `config` - SPI configuration
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if the SPI bus is already in use
    /// or the SPI ID is invalid, and `PlatformError::InvalidConfig` for a zero
    /// frequency.
    fn create_spi(&mut self, spi_id: u8, config: SpiConfig) -> Result<Self::Spi>;

    /// Create a timer handle
    ///
    /// Handles share one clock.
    fn create_timer(&mut self) -> Result<Self::Timer>;
}
