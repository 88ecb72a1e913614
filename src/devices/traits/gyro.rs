//! Gyroscope Sensor Trait
//!
//! Device-independent interface consumed by calibration and the lock
//! controller.
//!
//! ## Usage
//!
//! ```ignore
//! use gyro_lock::devices::traits::GyroSensor;
//!
//! fn sample<G: GyroSensor>(gyro: &mut G) -> Result<RawSample, GyroError> {
//!     gyro.configure()?;
//!     gyro.read_axes()
//! }
//! ```

use crate::platform::{PlatformError, SpiError};
use core::fmt;
use gyro_lock_core::RawSample;

/// Gyroscope error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroError {
    /// Bus transfer failed
    Transport(PlatformError),

    /// Bus transfer did not complete within the configured bound
    TransportTimeout,

    /// `read_axes` called before `configure`
    NotConfigured,

    /// Identity register returned an unexpected value
    UnknownDevice(u8),
}

impl From<PlatformError> for GyroError {
    fn from(error: PlatformError) -> Self {
        match error {
            PlatformError::Spi(SpiError::Timeout) => GyroError::TransportTimeout,
            other => GyroError::Transport(other),
        }
    }
}

impl fmt::Display for GyroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GyroError::Transport(e) => write!(f, "gyro transport failed: {}", e),
            GyroError::TransportTimeout => write!(f, "gyro transfer timed out"),
            GyroError::NotConfigured => write!(f, "gyro not configured"),
            GyroError::UnknownDevice(id) => write!(f, "unknown gyro WHO_AM_I {:#04x}", id),
        }
    }
}

/// Synchronous 3-axis gyroscope
///
/// Every call is a complete request/response exchange with the device.
pub trait GyroSensor {
    /// Write the device configuration
    ///
    /// Writes are not read back; a device that ignores them is not detected.
    fn configure(&mut self) -> Result<(), GyroError>;

    /// Read one angular-rate sample in device counts
    fn read_axes(&mut self) -> Result<RawSample, GyroError>;

    /// Degrees per second per count at the configured range
    fn sensitivity(&self) -> f32;

    /// `false` after repeated consecutive transport failures
    fn is_healthy(&self) -> bool;
}
