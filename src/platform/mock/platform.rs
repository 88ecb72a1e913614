//! Mock Platform implementation for testing

use crate::platform::{
    error::PlatformError,
    traits::{Platform, SpiConfig},
    Result,
};

use super::{MockSpi, MockTimer};

/// Mock Platform implementation
///
/// Provides mock peripheral implementations for hardware-free testing.
/// Every peripheral handed out shares the platform clock.
///
/// # Example
///
/// ```ignore
/// use gyro_lock::platform::mock::MockPlatform;
/// use gyro_lock::platform::traits::{Platform, SpiInterface};
///
/// let mut platform = MockPlatform::new();
/// let mut spi = platform.create_spi(0, Default::default()).unwrap();
/// spi.write(&[0x23, 0x00]).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockPlatform {
    timer: MockTimer,
    spi_allocated: u8,
}

impl MockPlatform {
    /// Create a new mock platform
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of SPI peripherals
    pub const MAX_SPIS: u8 = 2;

    /// Shared clock handle
    pub fn timer(&self) -> &MockTimer {
        &self.timer
    }
}

impl Platform for MockPlatform {
    type Spi = MockSpi;
    type Timer = MockTimer;

    fn init() -> Result<Self> {
        Ok(Self::new())
    }

    fn create_spi(&mut self, spi_id: u8, config: SpiConfig) -> Result<Self::Spi> {
        if spi_id >= Self::MAX_SPIS {
            return Err(PlatformError::ResourceUnavailable);
        }
        let mask = 1u8 << spi_id;
        if self.spi_allocated & mask != 0 {
            return Err(PlatformError::ResourceUnavailable);
        }
        if config.frequency == 0 {
            return Err(PlatformError::InvalidConfig);
        }

        self.spi_allocated |= mask;
        Ok(MockSpi::with_timer(config, self.timer.clone()))
    }

    fn create_timer(&mut self) -> Result<Self::Timer> {
        Ok(self.timer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::traits::TimerInterface;

    #[test]
    fn test_mock_platform_init() {
        let platform = MockPlatform::init().unwrap();
        assert_eq!(platform.spi_allocated, 0);
    }

    #[test]
    fn test_mock_platform_create_spi() {
        let mut platform = MockPlatform::new();

        let spi = platform.create_spi(0, SpiConfig::default()).unwrap();
        assert_eq!(spi.frequency(), 1_000_000);

        // Same bus twice
        assert_eq!(
            platform.create_spi(0, SpiConfig::default()).err(),
            Some(PlatformError::ResourceUnavailable)
        );
        // Out of range
        assert_eq!(
            platform.create_spi(2, SpiConfig::default()).err(),
            Some(PlatformError::ResourceUnavailable)
        );
        assert!(platform.create_spi(1, SpiConfig::default()).is_ok());
    }

    #[test]
    fn test_mock_platform_rejects_zero_frequency() {
        let mut platform = MockPlatform::new();
        let config = SpiConfig {
            frequency: 0,
            ..SpiConfig::default()
        };
        assert_eq!(
            platform.create_spi(0, config).err(),
            Some(PlatformError::InvalidConfig)
        );
    }

    #[test]
    fn test_mock_platform_timers_share_clock() {
        let mut platform = MockPlatform::new();
        let mut timer = platform.create_timer().unwrap();

        timer.delay_ms(3).unwrap();
        assert_eq!(platform.timer().now_ms(), 3);
    }
}
