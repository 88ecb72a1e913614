//! L3GD20 SPI Driver Implementation

use super::config::GyroConfig;
use super::registers::{
    self, AUTO_INCREMENT_BIT, AXES_FRAME_LEN, OUT_X_L, READ_BIT, REGISTER_FRAME_LEN,
};
use crate::devices::traits::{GyroError, GyroSensor};
use crate::platform::traits::SpiInterface;
use gyro_lock_core::RawSample;

/// Maximum consecutive errors before marking sensor unhealthy
const MAX_CONSECUTIVE_ERRORS: u32 = 3;

/// Devices answering the L3GD20 register map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroModel {
    L3gd20,
    I3g4250d,
}

impl GyroModel {
    pub fn from_who_am_i(value: u8) -> Option<Self> {
        match value {
            registers::L3GD20_WHO_AM_I_VALUE => Some(GyroModel::L3gd20),
            registers::I3G4250D_WHO_AM_I_VALUE => Some(GyroModel::I3g4250d),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GyroModel::L3gd20 => "L3GD20",
            GyroModel::I3g4250d => "I3G4250D",
        }
    }
}

/// L3GD20 / I3G4250D SPI Driver
///
/// Implements `GyroSensor`. Each register access is a single blocking SPI
/// call; completion handling belongs to the `SpiInterface` implementation.
pub struct L3gd20Driver<S: SpiInterface> {
    /// SPI bus handle (chip select included)
    spi: S,

    /// Driver configuration
    config: GyroConfig,

    /// Set once the configuration registers have been written
    configured: bool,

    /// Health status
    healthy: bool,

    /// Consecutive error count
    error_count: u32,
}

impl<S: SpiInterface> L3gd20Driver<S> {
    /// Create a driver; nothing is sent until `configure` or `who_am_i`
    pub fn new(spi: S, config: GyroConfig) -> Self {
        Self {
            spi,
            config,
            configured: false,
            healthy: true,
            error_count: 0,
        }
    }

    pub fn config(&self) -> &GyroConfig {
        &self.config
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn spi(&self) -> &S {
        &self.spi
    }

    pub fn spi_mut(&mut self) -> &mut S {
        &mut self.spi
    }

    /// Release the bus
    pub fn release(self) -> S {
        self.spi
    }

    /// Read the identity register
    pub fn who_am_i(&mut self) -> Result<u8, GyroError> {
        self.read_register(registers::WHO_AM_I)
    }

    /// Read and decode the identity register
    ///
    /// Optional probe; `configure` does not depend on it.
    pub fn identify(&mut self) -> Result<GyroModel, GyroError> {
        let value = self.who_am_i()?;
        match GyroModel::from_who_am_i(value) {
            Some(model) => {
                crate::log_info!("{} detected (WHO_AM_I: {:#x})", model.name(), value);
                Ok(model)
            }
            None => {
                crate::log_error!(
                    "Unknown gyro WHO_AM_I: {:#x} (expected 0xd4 or 0xd3)",
                    value
                );
                Err(GyroError::UnknownDevice(value))
            }
        }
    }

    /// Read a single register
    fn read_register(&mut self, reg: u8) -> Result<u8, GyroError> {
        let tx = [reg | READ_BIT, 0x00];
        let mut rx = [0u8; REGISTER_FRAME_LEN];
        let result = self.spi.transfer(&tx, &mut rx);
        self.track(result)?;
        Ok(rx[1])
    }

    /// Write a single register
    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), GyroError> {
        let result = self.spi.write(&[reg, value]);
        self.track(result)
    }

    /// Update health bookkeeping from a bus result
    fn track(&mut self, result: crate::platform::Result<()>) -> Result<(), GyroError> {
        match result {
            Ok(()) => {
                self.error_count = 0;
                Ok(())
            }
            Err(e) => {
                self.error_count += 1;
                if self.error_count >= MAX_CONSECUTIVE_ERRORS {
                    self.healthy = false;
                }
                Err(GyroError::from(e))
            }
        }
    }
}

impl<S: SpiInterface> GyroSensor for L3gd20Driver<S> {
    fn configure(&mut self) -> Result<(), GyroError> {
        self.configured = false;

        for (reg, value) in self.config.register_sequence() {
            crate::log_debug!("gyro write reg {:#x} <- {:#x}", reg, value);
            self.write_register(reg, value)?;
        }

        self.configured = true;
        self.healthy = true;
        crate::log_info!(
            "gyro configured: {} Hz, {} mdps/LSB",
            self.config.data_rate.hz(),
            self.config.sensitivity() * 1000.0
        );
        Ok(())
    }

    fn read_axes(&mut self) -> Result<RawSample, GyroError> {
        if !self.configured {
            return Err(GyroError::NotConfigured);
        }

        let mut tx = [0u8; AXES_FRAME_LEN];
        tx[0] = OUT_X_L | READ_BIT | AUTO_INCREMENT_BIT;
        let mut rx = [0u8; AXES_FRAME_LEN];

        let result = self.spi.transfer(&tx, &mut rx);
        self.track(result)?;

        let mut payload = [0u8; 6];
        payload.copy_from_slice(&rx[1..]);
        Ok(RawSample::from_le_bytes(&payload))
    }

    fn sensitivity(&self) -> f32 {
        self.config.sensitivity()
    }

    fn is_healthy(&self) -> bool {
        self.healthy
    }
}
