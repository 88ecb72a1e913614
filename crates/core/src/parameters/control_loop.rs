//! Control Loop Parameter Definitions
//!
//! # Parameters
//!
//! - `LOOP_PERIOD_MS` - Period of the sampling loop (milliseconds)

use super::error::ParameterError;
use super::storage::{ParamValue, ParameterStore};

/// Default loop period (40 Hz)
const DEFAULT_PERIOD_MS: u32 = 25;

const MIN_PERIOD_MS: i32 = 1;
const MAX_PERIOD_MS: i32 = 1000;

/// Sampling loop parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopParams {
    /// Delay between control ticks in milliseconds
    pub period_ms: u32,
}

impl Default for LoopParams {
    fn default() -> Self {
        Self {
            period_ms: DEFAULT_PERIOD_MS,
        }
    }
}

impl LoopParams {
    /// Register loop parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register("LOOP_PERIOD_MS", ParamValue::Int(DEFAULT_PERIOD_MS as i32))
    }

    /// Load loop parameters from parameter store
    pub fn from_store(store: &ParameterStore) -> Self {
        let period_ms = match store.get("LOOP_PERIOD_MS") {
            Some(ParamValue::Int(v)) => (*v).clamp(MIN_PERIOD_MS, MAX_PERIOD_MS) as u32,
            _ => DEFAULT_PERIOD_MS,
        };
        Self { period_ms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_params_defaults() {
        let mut store = ParameterStore::new();
        LoopParams::register_defaults(&mut store).unwrap();
        assert_eq!(LoopParams::from_store(&store).period_ms, 25);
    }

    #[test]
    fn test_loop_params_clamp() {
        let mut store = ParameterStore::new();
        LoopParams::register_defaults(&mut store).unwrap();
        store.set("LOOP_PERIOD_MS", ParamValue::Int(0)).unwrap();
        assert_eq!(LoopParams::from_store(&store).period_ms, 1);
    }
}
