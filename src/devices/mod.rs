//! Device drivers
//!
//! Drivers are written against the platform abstraction traits, so they run
//! unchanged on any board backend and on the mock platform.
//!
//! ## Modules
//!
//! - `gyro`: gyroscope drivers (L3GD20 family, mock)
//! - `traits`: device trait definitions (`GyroSensor`)

pub mod gyro;
pub mod traits;
