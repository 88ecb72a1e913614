//! Gesture capture and scoring errors

use core::fmt;

/// Errors from gesture buffers, capture transitions and scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureError {
    /// Unlock requested before any gesture was recorded
    NoRecording,
    /// Buffer holds fewer samples than its configured length
    Incomplete {
        /// Samples currently held
        len: usize,
        /// Configured gesture length
        expected: usize,
    },
    /// Sequences being compared differ in length
    LengthMismatch {
        /// Length of the first sequence
        left: usize,
        /// Length of the second sequence
        right: usize,
    },
    /// Sequences being compared contain no samples
    Empty,
    /// Sample pushed into a buffer that is already complete
    BufferFull,
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureError::NoRecording => write!(f, "no gesture has been recorded"),
            GestureError::Incomplete { len, expected } => {
                write!(f, "gesture incomplete: {} of {} samples", len, expected)
            }
            GestureError::LengthMismatch { left, right } => {
                write!(f, "gesture length mismatch: {} vs {}", left, right)
            }
            GestureError::Empty => write!(f, "gesture contains no samples"),
            GestureError::BufferFull => write!(f, "gesture buffer already complete"),
        }
    }
}
