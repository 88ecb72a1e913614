//! SPI interface trait
//!
//! This module defines the SPI bus communication interface that platform implementations must provide.

use crate::platform::Result;

/// Default bound on waiting for a transfer to complete (10 ms)
pub const DEFAULT_TRANSFER_TIMEOUT_US: u32 = 10_000;

/// SPI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiConfig {
    /// Bus frequency in Hz
    pub frequency: u32,
    /// SPI mode (CPOL and CPHA)
    pub mode: SpiMode,
    /// Longest wait for transfer completion; `None` waits indefinitely
    pub timeout_us: Option<u32>,
}

impl Default for SpiConfig {
    /// Mode 3 at 1 MHz, the gyroscope's bus settings
    fn default() -> Self {
        Self {
            frequency: 1_000_000,
            mode: SpiMode::Mode3,
            timeout_us: Some(DEFAULT_TRANSFER_TIMEOUT_US),
        }
    }
}

/// SPI mode (Clock Polarity and Phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiMode {
    /// CPOL=0, CPHA=0
    Mode0,
    /// CPOL=0, CPHA=1
    Mode1,
    /// CPOL=1, CPHA=0
    Mode2,
    /// CPOL=1, CPHA=1
    Mode3,
}

/// SPI interface trait
///
/// Every call is a complete, blocking request: it returns only after the
/// peripheral has signalled completion (or the configured bound elapsed).
///
/// # Safety Invariants
///
/// - SPI peripheral must be initialized before use
/// - Only one owner per SPI bus instance
/// - At most one transfer in flight
/// - Chip select is asserted for the duration of each call
pub trait SpiInterface {
    /// Transfer data (full-duplex)
    ///
    /// Simultaneously transmits data from `write_buffer` and receives data into `read_buffer`.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Spi` if:
    /// - Buffers have different lengths (`SpiError::LengthMismatch`)
    /// - Transfer fails
    /// - Completion is not signalled in time (`SpiError::Timeout`)
    fn transfer(&mut self, write_buffer: &[u8], read_buffer: &mut [u8]) -> Result<()>;

    /// Write data (transmit only)
    ///
    /// Transmits data and discards received bytes.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Spi` if the write fails or times out.
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Active bus configuration
    fn config(&self) -> SpiConfig;
}
