//! Aggregate configuration for the gesture lock

use super::calibration::CalibrationParams;
use super::control_loop::LoopParams;
use super::error::ParameterError;
use super::gesture::GestureParams;
use super::storage::ParameterStore;

/// All parameter groups consumed by the lock controller
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LockParams {
    pub gesture: GestureParams,
    pub calibration: CalibrationParams,
    pub control_loop: LoopParams,
}

impl LockParams {
    /// Register every group's defaults
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        GestureParams::register_defaults(store)?;
        CalibrationParams::register_defaults(store)?;
        LoopParams::register_defaults(store)?;
        Ok(())
    }

    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            gesture: GestureParams::from_store(store),
            calibration: CalibrationParams::from_store(store),
            control_loop: LoopParams::from_store(store),
        }
    }
}
