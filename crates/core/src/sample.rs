//! Gyroscope sample types
//!
//! Samples move through three representations on every control tick:
//!
//! ```text
//! RawSample --(bias, sensitivity)--> ConditionedSample --(/ 32768)--> NormalizedSample
//! ```
//!
//! The degrees-per-second value is for display; the normalized value is for
//! gesture matching. Both are derived from the same bias-corrected count and
//! neither is computed from the other.

use nalgebra::Vector3;

/// Half-width of the signed 16-bit output range
pub const RAW_HALF_RANGE: f32 = 32768.0;

/// Angular rate scaled into [-1, 1], one entry per axis
pub type NormalizedSample = Vector3<f32>;

/// One raw angular-rate reading in device counts (two's complement)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl RawSample {
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Decode the six output bytes of the gyroscope
    ///
    /// Bytes are ordered `X_L, X_H, Y_L, Y_H, Z_L, Z_H`. Each axis is
    /// combined as `(high << 8) | low` and reinterpreted as signed.
    pub fn from_le_bytes(bytes: &[u8; 6]) -> Self {
        Self {
            x: i16::from_le_bytes([bytes[0], bytes[1]]),
            y: i16::from_le_bytes([bytes[2], bytes[3]]),
            z: i16::from_le_bytes([bytes[4], bytes[5]]),
        }
    }

    /// Axis values as floats, X/Y/Z order
    pub fn to_vector(self) -> Vector3<f32> {
        Vector3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

/// Steady-state offset in raw counts, subtracted before scaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bias(pub Vector3<f32>);

impl Bias {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    pub fn zero() -> Self {
        Self(Vector3::zeros())
    }

    /// Subtract the bias from a raw reading
    pub fn correct(&self, raw: RawSample) -> Vector3<f32> {
        raw.to_vector() - self.0
    }
}

/// Bias-corrected reading in engineering units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionedSample {
    /// Angular rate in degrees per second
    pub dps: Vector3<f32>,
    /// Bias-corrected value in raw counts (equal to `raw` when uncalibrated)
    pub corrected: Vector3<f32>,
    /// The reading this sample was derived from
    pub raw: RawSample,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_little_endian_axis() {
        let sample = RawSample::from_le_bytes(&[0x34, 0x12, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(sample.x, 0x1234);
        assert_eq!(sample.y, 0);
        assert_eq!(sample.z, 0);
    }

    #[test]
    fn test_decode_negative_twos_complement() {
        let sample = RawSample::from_le_bytes(&[0xFF, 0xFF, 0x00, 0x80, 0xFF, 0x7F]);
        assert_eq!(sample.x, -1);
        assert_eq!(sample.y, i16::MIN);
        assert_eq!(sample.z, i16::MAX);
    }

    #[test]
    fn test_decode_axis_order() {
        let sample = RawSample::from_le_bytes(&[0x01, 0x00, 0x02, 0x00, 0x03, 0x00]);
        assert_eq!(sample, RawSample::new(1, 2, 3));
    }

    #[test]
    fn test_bias_correct() {
        let bias = Bias::new(10.0, -4.5, 0.25);
        let corrected = bias.correct(RawSample::new(12, -4, 0));
        assert!((corrected.x - 2.0).abs() < 1e-6);
        assert!((corrected.y - 0.5).abs() < 1e-6);
        assert!((corrected.z + 0.25).abs() < 1e-6);
    }
}
