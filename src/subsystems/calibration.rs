//! Gyroscope bias calibration
//!
//! Collects a window of readings while the device is at rest and averages
//! them into a [`Bias`]. Readings are separated by a fixed delay so the
//! window spans `sample_count * delay_ms` milliseconds.
//!
//! The device must stay still for the whole window. Motion during
//! calibration is not detected and skews the bias until the next run.

use crate::devices::traits::{GyroError, GyroSensor};
use crate::platform::{PlatformError, TimerInterface};
use core::fmt;
use gyro_lock_core::parameters::CalibrationParams;
use gyro_lock_core::{Bias, BiasAccumulator};

/// Calibration failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationError {
    /// A reading failed
    Gyro(GyroError),
    /// The inter-sample delay failed
    Timer(PlatformError),
    /// Window size of zero
    NoSamples,
}

impl From<GyroError> for CalibrationError {
    fn from(error: GyroError) -> Self {
        CalibrationError::Gyro(error)
    }
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalibrationError::Gyro(e) => write!(f, "calibration read failed: {}", e),
            CalibrationError::Timer(e) => write!(f, "calibration delay failed: {}", e),
            CalibrationError::NoSamples => write!(f, "calibration window is empty"),
        }
    }
}

/// Run one calibration window
///
/// # Errors
///
/// Any failed reading aborts the run. Nothing is returned for a partial
/// window, so the caller's previous bias stays in effect.
pub fn calibrate<G, T>(
    gyro: &mut G,
    timer: &mut T,
    params: &CalibrationParams,
) -> Result<Bias, CalibrationError>
where
    G: GyroSensor,
    T: TimerInterface,
{
    if params.sample_count == 0 {
        return Err(CalibrationError::NoSamples);
    }

    crate::log_info!(
        "Calibrating gyro: {} samples, {} ms apart",
        params.sample_count,
        params.delay_ms
    );

    let mut accumulator = BiasAccumulator::new();
    for i in 0..params.sample_count {
        accumulator.add(gyro.read_axes()?);
        if i + 1 < params.sample_count && params.delay_ms > 0 {
            timer
                .delay_ms(params.delay_ms)
                .map_err(CalibrationError::Timer)?;
        }
    }

    let bias = accumulator.finish().ok_or(CalibrationError::NoSamples)?;
    crate::log_info!(
        "Gyro calibrated (xyz): {}, {}, {}",
        bias.0.x,
        bias.0.y,
        bias.0.z
    );
    Ok(bias)
}
