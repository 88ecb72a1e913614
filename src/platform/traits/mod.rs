//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod platform;
pub mod spi;
pub mod timer;

pub use platform::Platform;
pub use spi::{SpiConfig, SpiInterface, SpiMode};
pub use timer::TimerInterface;
