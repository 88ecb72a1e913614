//! Sample conditioning
//!
//! Turns raw counts into degrees per second for display and into the
//! normalized [-1, 1] representation stored in gesture buffers.

use crate::sample::{Bias, ConditionedSample, NormalizedSample, RawSample, RAW_HALF_RANGE};

/// Applies bias correction and unit conversion to raw readings
#[derive(Debug, Clone, Copy)]
pub struct SampleConditioner {
    /// Degrees per second per raw LSB
    sensitivity: f32,
    /// Present once calibration has completed
    bias: Option<Bias>,
}

impl SampleConditioner {
    /// Create an uncalibrated conditioner
    ///
    /// # Arguments
    ///
    /// * `sensitivity` - Device scale factor in dps/LSB (8.75e-3 at ±245 dps)
    pub fn new(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            bias: None,
        }
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    pub fn is_calibrated(&self) -> bool {
        self.bias.is_some()
    }

    pub fn bias(&self) -> Option<&Bias> {
        self.bias.as_ref()
    }

    /// Install a bias from a completed calibration run
    pub fn set_bias(&mut self, bias: Bias) {
        self.bias = Some(bias);
    }

    /// Return to the uncalibrated state
    pub fn clear_bias(&mut self) {
        self.bias = None;
    }

    /// Bias-correct and scale one reading
    pub fn condition(&self, raw: RawSample) -> ConditionedSample {
        let corrected = match &self.bias {
            Some(bias) => bias.correct(raw),
            None => raw.to_vector(),
        };

        ConditionedSample {
            dps: corrected * self.sensitivity,
            corrected,
            raw,
        }
    }

    /// Scale the corrected counts of a sample into [-1, 1]
    ///
    /// Bias correction can push a full-scale reading slightly past the
    /// 16-bit range, so the result is clamped.
    pub fn normalize(sample: &ConditionedSample) -> NormalizedSample {
        sample
            .corrected
            .map(|v| (v / RAW_HALF_RANGE).clamp(-1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    const SENSITIVITY: f32 = 8.75 / 1000.0;

    #[test]
    fn test_uncalibrated_uses_raw() {
        let conditioner = SampleConditioner::new(SENSITIVITY);
        assert!(!conditioner.is_calibrated());

        let sample = conditioner.condition(RawSample::new(1000, -1000, 0));
        assert!((sample.dps.x - 8.75).abs() < 1e-4);
        assert!((sample.dps.y + 8.75).abs() < 1e-4);
        assert_eq!(sample.dps.z, 0.0);
        assert_eq!(sample.corrected, Vector3::new(1000.0, -1000.0, 0.0));
    }

    #[test]
    fn test_reading_equal_to_bias_is_zero_dps() {
        let mut conditioner = SampleConditioner::new(SENSITIVITY);
        conditioner.set_bias(Bias::new(12.0, -7.0, 3.0));
        assert!(conditioner.is_calibrated());

        let sample = conditioner.condition(RawSample::new(12, -7, 3));
        assert_eq!(sample.dps, Vector3::zeros());
        assert_eq!(sample.corrected, Vector3::zeros());
    }

    #[test]
    fn test_bias_applied_before_scaling() {
        let mut conditioner = SampleConditioner::new(SENSITIVITY);
        conditioner.set_bias(Bias::new(100.0, 0.0, 0.0));

        let sample = conditioner.condition(RawSample::new(1100, 0, 0));
        assert!((sample.dps.x - 8.75).abs() < 1e-4);
        assert_eq!(sample.raw, RawSample::new(1100, 0, 0));
    }

    #[test]
    fn test_clear_bias() {
        let mut conditioner = SampleConditioner::new(SENSITIVITY);
        conditioner.set_bias(Bias::new(1.0, 1.0, 1.0));
        conditioner.clear_bias();
        assert!(!conditioner.is_calibrated());
        assert!(conditioner.bias().is_none());
    }

    #[test]
    fn test_normalize_independent_of_sensitivity() {
        let a = SampleConditioner::new(SENSITIVITY);
        let b = SampleConditioner::new(70.0 / 1000.0);
        let raw = RawSample::new(16384, -16384, 0);

        let na = SampleConditioner::normalize(&a.condition(raw));
        let nb = SampleConditioner::normalize(&b.condition(raw));

        assert_eq!(na, nb);
        assert!((na.x - 0.5).abs() < 1e-6);
        assert!((na.y + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_clamps_full_scale() {
        let mut conditioner = SampleConditioner::new(SENSITIVITY);
        conditioner.set_bias(Bias::new(100.0, -100.0, 0.0));

        let sample = conditioner.condition(RawSample::new(i16::MIN, i16::MAX, i16::MIN));
        let normalized = SampleConditioner::normalize(&sample);

        assert_eq!(normalized.x, -1.0);
        assert_eq!(normalized.y, 1.0);
        assert_eq!(normalized.z, -1.0);
    }
}
