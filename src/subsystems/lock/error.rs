//! Lock controller errors

use crate::devices::traits::GyroError;
use crate::subsystems::calibration::CalibrationError;
use core::fmt;
use gyro_lock_core::gesture::GestureError;

/// Errors surfaced by [`LockController`](super::LockController)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockError {
    /// Sensor configuration or a sample read failed
    Gyro(GyroError),
    /// Capture precondition violated
    Gesture(GestureError),
    Calibration(CalibrationError),
    /// `tick` called before `start`
    NotStarted,
    /// Operation needs an idle capture
    Busy,
}

impl From<GyroError> for LockError {
    fn from(error: GyroError) -> Self {
        LockError::Gyro(error)
    }
}

impl From<GestureError> for LockError {
    fn from(error: GestureError) -> Self {
        LockError::Gesture(error)
    }
}

impl From<CalibrationError> for LockError {
    fn from(error: CalibrationError) -> Self {
        LockError::Calibration(error)
    }
}

impl fmt::Display for LockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockError::Gyro(e) => write!(f, "gyro: {}", e),
            LockError::Gesture(e) => write!(f, "gesture: {}", e),
            LockError::Calibration(e) => write!(f, "{}", e),
            LockError::NotStarted => write!(f, "controller not started"),
            LockError::Busy => write!(f, "capture in progress"),
        }
    }
}

// GestureError lives in the core crate, which has no defmt support
#[cfg(feature = "defmt")]
impl defmt::Format for LockError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            LockError::Gyro(e) => defmt::write!(f, "Gyro({})", e),
            LockError::Gesture(e) => defmt::write!(f, "Gesture({})", defmt::Display2Format(e)),
            LockError::Calibration(e) => defmt::write!(f, "Calibration({})", e),
            LockError::NotStarted => defmt::write!(f, "NotStarted"),
            LockError::Busy => defmt::write!(f, "Busy"),
        }
    }
}
