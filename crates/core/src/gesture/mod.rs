//! Gesture recording, capture and matching
//!
//! - [`buffer`]: fixed-length sample sequences
//! - [`capture`]: the record / unlock state machine
//! - [`scorer`]: similarity scoring between two complete sequences
//! - [`error`]: precondition failures shared by the above

pub mod buffer;
pub mod capture;
pub mod error;
pub mod scorer;

pub use buffer::{GestureBuffer, GestureRole, DEFAULT_GESTURE_SAMPLES, MAX_GESTURE_SAMPLES};
pub use capture::{CaptureEvent, CaptureState, GestureCapture, Trigger, TriggerOutcome};
pub use error::GestureError;
pub use scorer::{
    ScoreBreakdown, ScoringMethod, SimilarityResult, SimilarityScorer, DEFAULT_MSE_MAX,
    DEFAULT_THRESHOLD,
};
