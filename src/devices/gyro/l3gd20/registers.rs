//! L3GD20 Register Definitions
//!
//! Based on the L3GD20 datasheet (DocID022116).

#![allow(dead_code)]

// ============================================================================
// SPI address byte flags
// ============================================================================

/// Set in the address byte to read instead of write
pub const READ_BIT: u8 = 0x80;

/// Set in the address byte to auto-increment across a burst
pub const AUTO_INCREMENT_BIT: u8 = 0x40;

// ============================================================================
// Registers
// ============================================================================

/// Device identification
pub const WHO_AM_I: u8 = 0x0F;

/// Data rate, bandwidth, power mode and axis enables
pub const CTRL_REG1: u8 = 0x20;

/// High-pass filter mode and cutoff
pub const CTRL_REG2: u8 = 0x21;

/// Interrupt configuration
pub const CTRL_REG3: u8 = 0x22;

/// Full-scale selection, block data update, endianness
pub const CTRL_REG4: u8 = 0x23;

/// FIFO and high-pass filter enable
pub const CTRL_REG5: u8 = 0x24;

/// Temperature output
pub const OUT_TEMP: u8 = 0x26;

/// Data-ready and overrun status
pub const STATUS_REG: u8 = 0x27;

/// First of six angular-rate output registers (X_L, X_H, Y_L, Y_H, Z_L, Z_H)
pub const OUT_X_L: u8 = 0x28;

// ============================================================================
// Identity values
// ============================================================================

/// WHO_AM_I value of the L3GD20
pub const L3GD20_WHO_AM_I_VALUE: u8 = 0xD4;

/// WHO_AM_I value of the I3G4250D
pub const I3G4250D_WHO_AM_I_VALUE: u8 = 0xD3;

// ============================================================================
// CTRL_REG1 fields
// ============================================================================

/// Output data rate field shift (bits 7:6)
pub const CTRL_REG1_DR_SHIFT: u8 = 6;

/// Bandwidth field shift (bits 5:4)
pub const CTRL_REG1_BW_SHIFT: u8 = 4;

/// Normal mode (power-down when clear)
pub const CTRL_REG1_PD: u8 = 0x08;

/// Z, Y and X axis enables
pub const CTRL_REG1_ZEN: u8 = 0x04;
pub const CTRL_REG1_YEN: u8 = 0x02;
pub const CTRL_REG1_XEN: u8 = 0x01;

// ============================================================================
// CTRL_REG4 / CTRL_REG5 fields
// ============================================================================

/// Full-scale field shift (bits 5:4)
pub const CTRL_REG4_FS_SHIFT: u8 = 4;

/// High-pass filter enable
pub const CTRL_REG5_HPEN: u8 = 0x10;

// ============================================================================
// Frame sizes
// ============================================================================

/// Address byte plus six output bytes
pub const AXES_FRAME_LEN: usize = 7;

/// Address byte plus one register byte
pub const REGISTER_FRAME_LEN: usize = 2;
