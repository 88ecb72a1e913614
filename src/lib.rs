#![cfg_attr(not(test), no_std)]

//! gyro_lock - Gesture lock driven by an SPI gyroscope
//!
//! A user records a short hand motion, then unlocks by repeating it. This
//! crate holds the hardware-facing half: platform traits, the L3GD20
//! driver, calibration and the lock controller. Sample conditioning,
//! gesture capture and scoring live in `gyro_lock_core`.

#[cfg(all(feature = "mock", not(test)))]
extern crate std;

// Platform abstraction layer
pub mod platform;

// Device drivers using platform abstraction
pub mod devices;

// Logging macros
pub mod core;

// Calibration and the lock controller
pub mod subsystems;
