//! Gyroscope bias estimation
//!
//! The bias is the per-axis mean of raw readings taken while the device is
//! at rest. No outlier rejection is performed: a single disturbance inside
//! the window shifts the estimate for the rest of the session.
//!
//! The sampling procedure itself (reads separated by a fixed delay) lives in
//! `gyro_lock::subsystems::calibration`, which owns the transport and the
//! timer.

use crate::sample::{Bias, RawSample};
use nalgebra::Vector3;

/// Running per-axis sum of raw readings
///
/// Integer sums keep the estimate exact for any window that fits in `i64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BiasAccumulator {
    sum: [i64; 3],
    count: u32,
}

impl BiasAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one reading to the window
    pub fn add(&mut self, sample: RawSample) {
        self.sum[0] += sample.x as i64;
        self.sum[1] += sample.y as i64;
        self.sum[2] += sample.z as i64;
        self.count += 1;
    }

    /// Number of readings accumulated so far
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Mean of the window, or `None` if nothing was accumulated
    pub fn finish(&self) -> Option<Bias> {
        if self.count == 0 {
            return None;
        }

        let n = self.count as f64;
        Some(Bias(Vector3::new(
            (self.sum[0] as f64 / n) as f32,
            (self.sum[1] as f64 / n) as f32,
            (self.sum[2] as f64 / n) as f32,
        )))
    }
}

/// Estimate gyro bias from a slice of static samples
///
/// Returns `None` for an empty slice.
pub fn estimate_bias(samples: &[RawSample]) -> Option<Bias> {
    samples
        .iter()
        .fold(BiasAccumulator::new(), |mut acc, sample| {
            acc.add(*sample);
            acc
        })
        .finish()
}
