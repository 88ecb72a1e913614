//! Gesture similarity scoring
//!
//! The composite score blends three sub-metrics over two equal-length
//! sequences of normalized samples:
//!
//! ```text
//! mse_score    = 1 / (1 + mean((a - b)^2))
//! energy_score = 1 / (1 + |sum(|a|) - sum(|b|)|)
//! sign_score   = (3 - axes whose summed sign differs) / 3
//! score        = 0.6 * mse_score + 0.3 * energy_score + 0.1 * sign_score
//! ```
//!
//! Every sub-metric is symmetric in its arguments, so `score(a, b)` equals
//! `score(b, a)`, and identical sequences score exactly 1.0.
//!
//! For the sign comparison a summed value of exactly zero counts as
//! non-negative.

use super::buffer::GestureBuffer;
use super::error::GestureError;
use crate::sample::NormalizedSample;
use libm::fabsf;

/// Weight of the shape (mean squared error) component
pub const WEIGHT_MSE: f32 = 0.6;

/// Weight of the total energy component
pub const WEIGHT_ENERGY: f32 = 0.3;

/// Weight of the per-axis direction component
pub const WEIGHT_SIGN: f32 = 0.1;

/// Composite score a challenge must exceed to match
pub const DEFAULT_THRESHOLD: f32 = 0.8;

/// Mean squared error a challenge must stay under in MSE-only scoring
pub const DEFAULT_MSE_MAX: f32 = 0.05;

/// How a pair of gestures is judged
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoringMethod {
    /// Weighted shape/energy/direction score compared against `threshold`
    Composite { threshold: f32 },
    /// Match when the raw mean squared error is below `max_error`
    ///
    /// The reported score is the normalized MSE component.
    MeanSquaredError { max_error: f32 },
}

impl Default for ScoringMethod {
    fn default() -> Self {
        ScoringMethod::Composite {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Intermediate values behind a similarity score
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreBreakdown {
    /// Mean squared error over all samples and axes
    pub mse: f32,
    /// Sum of absolute values of the first sequence
    pub energy_a: f32,
    /// Sum of absolute values of the second sequence
    pub energy_b: f32,
    /// Number of axes (0-3) whose summed sign differs
    pub sign_diff: u8,
    /// `1 / (1 + mse)`
    pub mse_score: f32,
    /// `1 / (1 + |energy_a - energy_b|)`
    pub energy_score: f32,
    /// `(3 - sign_diff) / 3`
    pub sign_score: f32,
}

/// Outcome of comparing two gestures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityResult {
    /// Similarity in [0, 1]; 1.0 for identical gestures
    pub score: f32,
    /// Whether the gestures are close enough to count as a match
    pub matched: bool,
    pub breakdown: ScoreBreakdown,
}

/// Compares recorded and challenge gestures
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityScorer {
    method: ScoringMethod,
}

impl SimilarityScorer {
    pub fn new(method: ScoringMethod) -> Self {
        Self { method }
    }

    pub fn method(&self) -> ScoringMethod {
        self.method
    }

    /// Score two complete gesture buffers
    ///
    /// # Errors
    ///
    /// - `GestureError::Incomplete` if either buffer is partially filled
    /// - `GestureError::LengthMismatch` if the buffers differ in length
    pub fn compare(
        &self,
        a: &GestureBuffer,
        b: &GestureBuffer,
    ) -> Result<SimilarityResult, GestureError> {
        self.compare_samples(a.samples()?, b.samples()?)
    }

    /// Score two sample sequences of equal, non-zero length
    pub fn compare_samples(
        &self,
        a: &[NormalizedSample],
        b: &[NormalizedSample],
    ) -> Result<SimilarityResult, GestureError> {
        if a.len() != b.len() {
            return Err(GestureError::LengthMismatch {
                left: a.len(),
                right: b.len(),
            });
        }
        if a.is_empty() {
            return Err(GestureError::Empty);
        }

        let breakdown = breakdown(a, b);

        let result = match self.method {
            ScoringMethod::Composite { threshold } => {
                let score = (WEIGHT_MSE * breakdown.mse_score
                    + WEIGHT_ENERGY * breakdown.energy_score
                    + WEIGHT_SIGN * breakdown.sign_score)
                    .clamp(0.0, 1.0);
                SimilarityResult {
                    score,
                    matched: score > threshold,
                    breakdown,
                }
            }
            ScoringMethod::MeanSquaredError { max_error } => SimilarityResult {
                score: breakdown.mse_score,
                matched: breakdown.mse < max_error,
                breakdown,
            },
        };

        Ok(result)
    }
}

fn breakdown(a: &[NormalizedSample], b: &[NormalizedSample]) -> ScoreBreakdown {
    let mut energy_a = 0.0f32;
    let mut energy_b = 0.0f32;
    let mut sum_a = [0.0f32; 3];
    let mut sum_b = [0.0f32; 3];
    let mut squared_error = 0.0f32;

    for (sa, sb) in a.iter().zip(b.iter()) {
        for axis in 0..3 {
            let va = sa[axis];
            let vb = sb[axis];
            energy_a += fabsf(va);
            energy_b += fabsf(vb);
            sum_a[axis] += va;
            sum_b[axis] += vb;
            let diff = va - vb;
            squared_error += diff * diff;
        }
    }

    let mse = squared_error / (a.len() * 3) as f32;

    let sign_diff = (0..3)
        .filter(|&axis| (sum_a[axis] >= 0.0) != (sum_b[axis] >= 0.0))
        .count() as u8;

    ScoreBreakdown {
        mse,
        energy_a,
        energy_b,
        sign_diff,
        mse_score: 1.0 / (1.0 + mse),
        energy_score: 1.0 / (1.0 + fabsf(energy_a - energy_b)),
        sign_score: (3 - sign_diff) as f32 / 3.0,
    }
}
