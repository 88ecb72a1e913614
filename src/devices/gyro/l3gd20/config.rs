//! L3GD20 driver configuration

use super::registers::{
    CTRL_REG1, CTRL_REG1_BW_SHIFT, CTRL_REG1_DR_SHIFT, CTRL_REG1_PD, CTRL_REG1_XEN,
    CTRL_REG1_YEN, CTRL_REG1_ZEN, CTRL_REG4, CTRL_REG4_FS_SHIFT, CTRL_REG5, CTRL_REG5_HPEN,
};
use crate::platform::traits::SpiConfig;
use heapless::Vec;

/// Output data rate (CTRL_REG1 DR bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputDataRate {
    Hz95,
    #[default]
    Hz190,
    Hz380,
    Hz760,
}

impl OutputDataRate {
    /// Two-bit DR field value
    pub fn bits(self) -> u8 {
        match self {
            OutputDataRate::Hz95 => 0b00,
            OutputDataRate::Hz190 => 0b01,
            OutputDataRate::Hz380 => 0b10,
            OutputDataRate::Hz760 => 0b11,
        }
    }

    pub fn hz(self) -> u32 {
        match self {
            OutputDataRate::Hz95 => 95,
            OutputDataRate::Hz190 => 190,
            OutputDataRate::Hz380 => 380,
            OutputDataRate::Hz760 => 760,
        }
    }
}

/// Full-scale range (CTRL_REG4 FS bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FullScale {
    /// ±245 dps
    #[default]
    Dps245,
    /// ±500 dps
    Dps500,
    /// ±2000 dps
    Dps2000,
}

impl FullScale {
    /// Two-bit FS field value
    pub fn bits(self) -> u8 {
        match self {
            FullScale::Dps245 => 0b00,
            FullScale::Dps500 => 0b01,
            FullScale::Dps2000 => 0b10,
        }
    }

    /// Degrees per second per LSB
    pub fn sensitivity(self) -> f32 {
        match self {
            FullScale::Dps245 => 8.75e-3,
            FullScale::Dps500 => 17.5e-3,
            FullScale::Dps2000 => 70.0e-3,
        }
    }
}

/// Configuration registers written by `configure()`
pub type RegisterSequence = Vec<(u8, u8), 3>;

/// L3GD20 driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GyroConfig {
    /// Output data rate
    pub data_rate: OutputDataRate,
    /// Bandwidth selection (0-3), meaning depends on `data_rate`
    pub bandwidth: u8,
    /// Full-scale range
    pub range: FullScale,
    /// Enable the on-chip high-pass filter
    pub high_pass_filter: bool,
    /// Bus settings
    pub spi: SpiConfig,
}

impl Default for GyroConfig {
    /// 190 Hz, bandwidth 2, ±245 dps, no filtering, mode 3 at 1 MHz
    fn default() -> Self {
        Self {
            data_rate: OutputDataRate::default(),
            bandwidth: 2,
            range: FullScale::default(),
            high_pass_filter: false,
            spi: SpiConfig::default(),
        }
    }
}

impl GyroConfig {
    /// CTRL_REG1: rate, bandwidth, normal mode, all axes enabled
    pub fn ctrl_reg1(&self) -> u8 {
        (self.data_rate.bits() << CTRL_REG1_DR_SHIFT)
            | ((self.bandwidth & 0b11) << CTRL_REG1_BW_SHIFT)
            | CTRL_REG1_PD
            | CTRL_REG1_ZEN
            | CTRL_REG1_YEN
            | CTRL_REG1_XEN
    }

    /// CTRL_REG4: full-scale range, continuous update, little-endian output
    pub fn ctrl_reg4(&self) -> u8 {
        self.range.bits() << CTRL_REG4_FS_SHIFT
    }

    /// CTRL_REG5, only when the high-pass filter is requested
    pub fn ctrl_reg5(&self) -> Option<u8> {
        self.high_pass_filter.then_some(CTRL_REG5_HPEN)
    }

    /// Ordered (register, value) writes that apply this configuration
    pub fn register_sequence(&self) -> RegisterSequence {
        let mut sequence = Vec::new();
        // Capacity covers every register below
        let _ = sequence.push((CTRL_REG1, self.ctrl_reg1()));
        let _ = sequence.push((CTRL_REG4, self.ctrl_reg4()));
        if let Some(value) = self.ctrl_reg5() {
            let _ = sequence.push((CTRL_REG5, value));
        }
        sequence
    }

    /// Degrees per second per LSB at the configured range
    pub fn sensitivity(&self) -> f32 {
        self.range.sensitivity()
    }
}
