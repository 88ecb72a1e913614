//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use gyro_lock::platform::mock::MockPlatform;
//! use gyro_lock::platform::traits::{Platform, SpiConfig, SpiInterface};
//!
//! let mut platform = MockPlatform::new();
//! let mut spi = platform.create_spi(0, SpiConfig::default()).unwrap();
//! spi.write(&[0x20, 0x6F]).unwrap();
//! ```

#![cfg(any(test, feature = "mock"))]

mod platform;
mod spi;
mod timer;

pub use platform::MockPlatform;
pub use spi::{MockSpi, SpiTransaction};
pub use timer::MockTimer;
