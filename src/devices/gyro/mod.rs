//! Gyroscope Drivers
//!
//! ## Available Drivers
//!
//! - `l3gd20`: ST L3GD20 / I3G4250D over SPI
//! - `mock`: scripted gyroscope (tests or feature `mock`)

pub mod l3gd20;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use l3gd20::{GyroConfig, GyroModel, L3gd20Driver};

#[cfg(any(test, feature = "mock"))]
pub use mock::MockGyro;
