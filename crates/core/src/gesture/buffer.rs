//! Fixed-capacity gesture buffers

use super::error::GestureError;
use crate::sample::NormalizedSample;
use heapless::Vec;

/// Largest gesture length a buffer can hold
pub const MAX_GESTURE_SAMPLES: usize = 128;

/// Default gesture length (samples per recording or challenge)
pub const DEFAULT_GESTURE_SAMPLES: usize = 30;

/// Which of the two buffers a capture is filling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureRole {
    /// The stored reference gesture
    Recorded,
    /// The gesture being compared against the reference
    Challenge,
}

impl GestureRole {
    pub fn name(&self) -> &'static str {
        match self {
            GestureRole::Recorded => "recorded",
            GestureRole::Challenge => "challenge",
        }
    }
}

/// Ordered sequence of normalized samples with a configured length
///
/// A buffer is empty, partially filled, or complete. Only complete buffers
/// expose their samples for scoring.
#[derive(Debug, Clone)]
pub struct GestureBuffer {
    samples: Vec<NormalizedSample, MAX_GESTURE_SAMPLES>,
    target_len: usize,
}

impl GestureBuffer {
    /// Create an empty buffer for gestures of `target_len` samples
    ///
    /// The length is clamped to `1..=MAX_GESTURE_SAMPLES`.
    pub fn new(target_len: usize) -> Self {
        Self {
            samples: Vec::new(),
            target_len: target_len.clamp(1, MAX_GESTURE_SAMPLES),
        }
    }

    /// Build a complete buffer from an existing sequence
    ///
    /// Sequences longer than `MAX_GESTURE_SAMPLES` are truncated.
    pub fn from_samples(samples: &[NormalizedSample]) -> Self {
        let mut buffer = Self::new(samples.len());
        for sample in samples.iter().take(buffer.target_len) {
            let _ = buffer.samples.push(*sample);
        }
        buffer
    }

    pub fn target_len(&self) -> usize {
        self.target_len
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.samples.len() == self.target_len
    }

    /// Discard all samples
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Append a sample at the cursor
    ///
    /// Returns the new sample count.
    pub fn push(&mut self, sample: NormalizedSample) -> Result<usize, GestureError> {
        if self.is_complete() {
            return Err(GestureError::BufferFull);
        }
        self.samples
            .push(sample)
            .map_err(|_| GestureError::BufferFull)?;
        Ok(self.samples.len())
    }

    /// Samples of a complete buffer
    pub fn samples(&self) -> Result<&[NormalizedSample], GestureError> {
        if !self.is_complete() {
            return Err(GestureError::Incomplete {
                len: self.samples.len(),
                expected: self.target_len,
            });
        }
        Ok(self.samples.as_slice())
    }
}
