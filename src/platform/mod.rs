//! Platform abstraction layer
//!
//! Hardware access for the gesture lock goes through the traits in
//! [`traits`]. Concrete backends:
//!
//! - [`hal`]: any `embedded-hal` 1.0 SPI device
//! - [`irq_spi`]: a peripheral completed by interrupt, with a bounded wait
//! - [`embassy`]: `embassy-time` timer (feature `embassy`)
//! - [`mock`]: simulated peripherals (tests or feature `mock`)

pub mod completion;
pub mod error;
pub mod hal;
pub mod irq_spi;
pub mod traits;

#[cfg(feature = "embassy")]
pub mod embassy;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use completion::CompletionFlag;
pub use irq_spi::{InterruptSpi, SpiPeripheral};
pub use error::{PlatformError, Result, SpiError, TimerError};
pub use traits::{Platform, SpiConfig, SpiInterface, TimerInterface};
