//! Device trait definitions

pub mod gyro;

pub use gyro::{GyroError, GyroSensor};
