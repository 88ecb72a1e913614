//! Parameter management types
//!
//! Typed parameter groups register their defaults in a [`ParameterStore`]
//! and load back from it with range clamping.

pub mod calibration;
pub mod control_loop;
pub mod error;
pub mod gesture;
pub mod lock;
pub mod storage;

pub use calibration::CalibrationParams;
pub use control_loop::LoopParams;
pub use error::ParameterError;
pub use gesture::GestureParams;
pub use lock::LockParams;
pub use storage::{ParamValue, ParameterStore, MAX_PARAMS, PARAM_NAME_LEN};
