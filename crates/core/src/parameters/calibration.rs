//! Calibration Parameter Definitions
//!
//! # Parameters
//!
//! - `CAL_SAMPLES` - Readings averaged into the bias estimate
//! - `CAL_DELAY_MS` - Delay between calibration readings (milliseconds)

use super::error::ParameterError;
use super::storage::{ParamValue, ParameterStore};

/// Default calibration window size
const DEFAULT_SAMPLES: u32 = 200;

/// Default delay between calibration reads in milliseconds
const DEFAULT_DELAY_MS: u32 = 5;

const MIN_SAMPLES: i32 = 1;
const MAX_SAMPLES: i32 = 5000;
const MAX_DELAY_MS: i32 = 1000;

/// Bias calibration parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationParams {
    /// Number of readings in the calibration window
    pub sample_count: u32,
    /// Delay between readings in milliseconds
    pub delay_ms: u32,
}

impl Default for CalibrationParams {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLES,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl CalibrationParams {
    /// Register calibration parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register("CAL_SAMPLES", ParamValue::Int(DEFAULT_SAMPLES as i32))?;
        store.register("CAL_DELAY_MS", ParamValue::Int(DEFAULT_DELAY_MS as i32))?;
        Ok(())
    }

    /// Load calibration parameters from parameter store
    pub fn from_store(store: &ParameterStore) -> Self {
        let sample_count = match store.get("CAL_SAMPLES") {
            Some(ParamValue::Int(v)) => (*v).clamp(MIN_SAMPLES, MAX_SAMPLES) as u32,
            _ => DEFAULT_SAMPLES,
        };

        let delay_ms = match store.get("CAL_DELAY_MS") {
            Some(ParamValue::Int(v)) => (*v).clamp(0, MAX_DELAY_MS) as u32,
            _ => DEFAULT_DELAY_MS,
        };

        Self {
            sample_count,
            delay_ms,
        }
    }
}
