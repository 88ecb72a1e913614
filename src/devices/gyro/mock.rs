//! Mock gyroscope for testing
//!
//! Provides a scripted gyroscope that implements `GyroSensor`. Useful for
//! exercising calibration and the lock controller without a bus.
//!
//! ## Usage
//!
//! ```ignore
//! use gyro_lock::devices::gyro::MockGyro;
//!
//! // Constant reading (e.g. a device at rest with some bias)
//! let mut gyro = MockGyro::with_default_reading(RawSample::new(12, -7, 3));
//!
//! // Next read times out
//! gyro.fail_next(1);
//! ```

use crate::devices::traits::{GyroError, GyroSensor};
use gyro_lock_core::RawSample;

/// Queue depth of scripted readings
pub const MOCK_QUEUE_LEN: usize = 256;

/// Mock gyroscope
///
/// Returns queued readings in order, then the default reading forever.
pub struct MockGyro {
    /// Queue of readings to return
    readings: heapless::Deque<RawSample, MOCK_QUEUE_LEN>,

    /// Reading returned when the queue is empty
    default_reading: RawSample,

    /// Scale factor reported to consumers
    sensitivity: f32,

    /// Number of upcoming calls that time out
    pending_failures: u32,

    configured: bool,
    configure_count: u32,
    read_count: u32,
    error_count: u32,
}

impl MockGyro {
    /// Create a mock gyro returning `reading` on every read
    pub fn with_default_reading(reading: RawSample) -> Self {
        Self {
            readings: heapless::Deque::new(),
            default_reading: reading,
            sensitivity: 8.75e-3,
            pending_failures: 0,
            configured: false,
            configure_count: 0,
            read_count: 0,
            error_count: 0,
        }
    }

    /// Create a mock gyro that plays back `readings` before returning zeros
    pub fn with_readings(readings: &[RawSample]) -> Self {
        let mut gyro = Self::with_default_reading(RawSample::default());
        for reading in readings.iter().take(MOCK_QUEUE_LEN) {
            let _ = gyro.readings.push_back(*reading);
        }
        gyro
    }

    /// Set the reading returned once the queue is empty
    pub fn set_default_reading(&mut self, reading: RawSample) {
        self.default_reading = reading;
    }

    /// Fail the next `count` calls with a transfer timeout
    pub fn fail_next(&mut self, count: u32) {
        self.pending_failures = count;
    }

    /// Number of successful `configure` calls
    pub fn configure_count(&self) -> u32 {
        self.configure_count
    }

    /// Number of successful reads
    pub fn read_count(&self) -> u32 {
        self.read_count
    }

    fn take_failure(&mut self) -> Result<(), GyroError> {
        if self.pending_failures > 0 {
            self.pending_failures -= 1;
            self.error_count += 1;
            return Err(GyroError::TransportTimeout);
        }
        self.error_count = 0;
        Ok(())
    }
}

impl GyroSensor for MockGyro {
    fn configure(&mut self) -> Result<(), GyroError> {
        self.take_failure()?;
        self.configured = true;
        self.configure_count += 1;
        Ok(())
    }

    fn read_axes(&mut self) -> Result<RawSample, GyroError> {
        if !self.configured {
            return Err(GyroError::NotConfigured);
        }
        self.take_failure()?;
        self.read_count += 1;
        Ok(self.readings.pop_front().unwrap_or(self.default_reading))
    }

    fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    fn is_healthy(&self) -> bool {
        self.error_count < 3
    }
}
