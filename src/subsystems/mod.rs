//! Subsystems built on the device and platform layers
//!
//! - [`calibration`]: timed bias calibration against a live gyroscope
//! - [`lock`]: the gesture lock controller and its I/O collaborators

pub mod calibration;
pub mod lock;
