//! L3GD20 3-axis gyroscope driver
//!
//! Register-level SPI driver for the ST L3GD20 and its register-compatible
//! successor I3G4250D.
//!
//! ## Bus framing
//!
//! The first byte of every frame is the register address. Bit 7 selects a
//! read, bit 6 enables address auto-increment for multi-byte reads:
//!
//! ```text
//! write:  [reg, value]
//! read:   [reg | 0x80, dummy]                       -> [_, value]
//! burst:  [OUT_X_L | 0xC0, dummy x 6]               -> [_, XL, XH, YL, YH, ZL, ZH]
//! ```

pub mod config;
pub mod driver;
pub mod registers;

pub use config::{FullScale, GyroConfig, OutputDataRate};
pub use driver::{GyroModel, L3gd20Driver};
