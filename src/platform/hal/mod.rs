//! Adapters from `embedded-hal` 1.0 traits to the platform traits
//!
//! Any board whose HAL implements `embedded_hal::spi::SpiDevice` can drive
//! the gyroscope through [`HalSpi`] without a dedicated platform module.

pub mod spi;

pub use spi::HalSpi;
