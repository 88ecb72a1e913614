//! Gesture Parameter Definitions
//!
//! # Parameters
//!
//! - `GES_SAMPLES` - Samples per recorded or challenge gesture
//! - `GES_METHOD` - Scoring method (0=composite, 1=mean squared error)
//! - `GES_THRESHOLD` - Composite score a challenge must exceed
//! - `GES_MSE_MAX` - Mean squared error a challenge must stay under (method 1)

use super::error::ParameterError;
use super::storage::{ParamValue, ParameterStore};
use crate::gesture::buffer::{DEFAULT_GESTURE_SAMPLES, MAX_GESTURE_SAMPLES};
use crate::gesture::scorer::{ScoringMethod, DEFAULT_MSE_MAX, DEFAULT_THRESHOLD};

/// Composite scoring
const METHOD_COMPOSITE: i32 = 0;

/// Mean squared error only
const METHOD_MSE: i32 = 1;

/// Smallest accepted mean squared error bound
const MIN_MSE_MAX: f32 = 1e-4;

/// Gesture capture and matching parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureParams {
    /// Samples per gesture (1..=MAX_GESTURE_SAMPLES)
    pub sample_count: usize,
    /// How recorded and challenge gestures are compared
    pub method: ScoringMethod,
}

impl Default for GestureParams {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_GESTURE_SAMPLES,
            method: ScoringMethod::default(),
        }
    }
}

impl GestureParams {
    /// Register gesture parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register("GES_SAMPLES", ParamValue::Int(DEFAULT_GESTURE_SAMPLES as i32))?;
        store.register("GES_METHOD", ParamValue::Int(METHOD_COMPOSITE))?;
        store.register("GES_THRESHOLD", ParamValue::Float(DEFAULT_THRESHOLD))?;
        store.register("GES_MSE_MAX", ParamValue::Float(DEFAULT_MSE_MAX))?;

        Ok(())
    }

    /// Load gesture parameters from parameter store
    ///
    /// Out-of-range values are clamped; missing values fall back to defaults.
    pub fn from_store(store: &ParameterStore) -> Self {
        let sample_count = match store.get("GES_SAMPLES") {
            Some(ParamValue::Int(v)) => (*v).clamp(1, MAX_GESTURE_SAMPLES as i32) as usize,
            _ => DEFAULT_GESTURE_SAMPLES,
        };

        let method_id = match store.get("GES_METHOD") {
            Some(ParamValue::Int(v)) => *v,
            _ => METHOD_COMPOSITE,
        };

        let threshold = store
            .get("GES_THRESHOLD")
            .map(|v| v.as_f32().clamp(0.0, 1.0))
            .unwrap_or(DEFAULT_THRESHOLD);

        let max_error = store
            .get("GES_MSE_MAX")
            .map(|v| v.as_f32().clamp(MIN_MSE_MAX, 4.0))
            .unwrap_or(DEFAULT_MSE_MAX);

        let method = if method_id == METHOD_MSE {
            ScoringMethod::MeanSquaredError { max_error }
        } else {
            ScoringMethod::Composite { threshold }
        };

        Self {
            sample_count,
            method,
        }
    }
}
