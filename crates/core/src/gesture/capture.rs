//! Gesture capture state machine
//!
//! ```text
//!            start_recording                N samples
//!   Idle ---------------------> Recording ------------> Idle (recording stored)
//!    |
//!    |  start_unlock (recording exists)     N samples
//!    +------------------------> Unlocking ------------> Idle (challenge scored)
//! ```
//!
//! Triggers are accepted only in `Idle`. A trigger that arrives while a
//! capture is running is ignored; it is neither queued nor allowed to
//! interrupt the capture. One sample is consumed per `push`, which the
//! controller calls once per control tick.

use super::buffer::{GestureBuffer, GestureRole};
use super::error::GestureError;
use super::scorer::{SimilarityResult, SimilarityScorer};
use crate::parameters::GestureParams;
use crate::sample::NormalizedSample;

/// Capture state with the cursor into the active buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    Recording {
        cursor: usize,
    },
    Unlocking {
        cursor: usize,
    },
}

impl CaptureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, CaptureState::Idle)
    }

    /// Buffer being filled, if any
    pub fn role(&self) -> Option<GestureRole> {
        match self {
            CaptureState::Idle => None,
            CaptureState::Recording { .. } => Some(GestureRole::Recorded),
            CaptureState::Unlocking { .. } => Some(GestureRole::Challenge),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CaptureState::Idle => "idle",
            CaptureState::Recording { .. } => "recording",
            CaptureState::Unlocking { .. } => "unlocking",
        }
    }
}

/// External request to begin a capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    StartRecording,
    StartUnlock,
}

/// Result of delivering a trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A capture of the given role began
    Started(GestureRole),
    /// A capture was already running; the trigger was dropped
    Ignored(CaptureState),
}

/// What happened when a sample was pushed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaptureEvent {
    /// No capture running; the sample was not stored
    Idle,
    /// Sample stored, capture still running
    Progress {
        role: GestureRole,
        count: usize,
        target: usize,
    },
    /// Recorded gesture complete and available for unlocking
    RecordingStored,
    /// Challenge gesture complete and scored against the recording
    UnlockAttempt(SimilarityResult),
}

/// Owns the recorded and challenge buffers and drives capture transitions
#[derive(Debug, Clone)]
pub struct GestureCapture {
    state: CaptureState,
    recorded: GestureBuffer,
    challenge: GestureBuffer,
    has_recording: bool,
    scorer: SimilarityScorer,
}

impl GestureCapture {
    pub fn new(params: &GestureParams) -> Self {
        Self {
            state: CaptureState::Idle,
            recorded: GestureBuffer::new(params.sample_count),
            challenge: GestureBuffer::new(params.sample_count),
            has_recording: false,
            scorer: SimilarityScorer::new(params.method),
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Whether a complete recorded gesture is available
    pub fn has_recording(&self) -> bool {
        self.has_recording
    }

    pub fn recorded(&self) -> &GestureBuffer {
        &self.recorded
    }

    pub fn challenge(&self) -> &GestureBuffer {
        &self.challenge
    }

    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    /// Samples per gesture
    pub fn sample_count(&self) -> usize {
        self.recorded.target_len()
    }

    /// Deliver an external trigger
    pub fn trigger(&mut self, trigger: Trigger) -> Result<TriggerOutcome, GestureError> {
        match trigger {
            Trigger::StartRecording => Ok(self.start_recording()),
            Trigger::StartUnlock => self.start_unlock(),
        }
    }

    /// Begin recording a new reference gesture
    ///
    /// The previous recording is discarded as soon as the capture starts.
    pub fn start_recording(&mut self) -> TriggerOutcome {
        if !self.state.is_idle() {
            return TriggerOutcome::Ignored(self.state);
        }

        self.recorded.clear();
        self.has_recording = false;
        self.state = CaptureState::Recording { cursor: 0 };
        TriggerOutcome::Started(GestureRole::Recorded)
    }

    /// Begin capturing a challenge gesture
    ///
    /// # Errors
    ///
    /// Returns `GestureError::NoRecording` when idle with no recorded
    /// gesture. A busy capture takes precedence and yields `Ignored`.
    pub fn start_unlock(&mut self) -> Result<TriggerOutcome, GestureError> {
        if !self.state.is_idle() {
            return Ok(TriggerOutcome::Ignored(self.state));
        }
        if !self.has_recording {
            return Err(GestureError::NoRecording);
        }

        self.challenge.clear();
        self.state = CaptureState::Unlocking { cursor: 0 };
        Ok(TriggerOutcome::Started(GestureRole::Challenge))
    }

    /// Feed one sample to the running capture
    ///
    /// Completing a challenge scores it against the recording before
    /// returning.
    pub fn push(&mut self, sample: NormalizedSample) -> Result<CaptureEvent, GestureError> {
        match self.state {
            CaptureState::Idle => Ok(CaptureEvent::Idle),
            CaptureState::Recording { .. } => {
                let count = self.recorded.push(sample)?;
                if self.recorded.is_complete() {
                    self.state = CaptureState::Idle;
                    self.has_recording = true;
                    Ok(CaptureEvent::RecordingStored)
                } else {
                    self.state = CaptureState::Recording { cursor: count };
                    Ok(CaptureEvent::Progress {
                        role: GestureRole::Recorded,
                        count,
                        target: self.recorded.target_len(),
                    })
                }
            }
            CaptureState::Unlocking { .. } => {
                let count = self.challenge.push(sample)?;
                if self.challenge.is_complete() {
                    self.state = CaptureState::Idle;
                    let result = self.scorer.compare(&self.recorded, &self.challenge)?;
                    Ok(CaptureEvent::UnlockAttempt(result))
                } else {
                    self.state = CaptureState::Unlocking { cursor: count };
                    Ok(CaptureEvent::Progress {
                        role: GestureRole::Challenge,
                        count,
                        target: self.challenge.target_len(),
                    })
                }
            }
        }
    }

    /// Abandon the running capture and return to `Idle`
    ///
    /// Only the active buffer is discarded. An aborted recording leaves no
    /// recording behind (the old one was dropped when it started); an
    /// aborted challenge leaves the recording intact.
    pub fn abort(&mut self) -> Option<GestureRole> {
        let role = self.state.role();
        match role {
            Some(GestureRole::Recorded) => self.recorded.clear(),
            Some(GestureRole::Challenge) => self.challenge.clear(),
            None => {}
        }
        self.state = CaptureState::Idle;
        role
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::scorer::ScoringMethod;
    use nalgebra::Vector3;

    const N: usize = 5;

    fn params() -> GestureParams {
        GestureParams {
            sample_count: N,
            method: ScoringMethod::default(),
        }
    }

    fn sample(i: usize) -> NormalizedSample {
        Vector3::new(i as f32 * 0.1, -(i as f32) * 0.05, 0.2)
    }

    fn record(capture: &mut GestureCapture) {
        assert_eq!(
            capture.start_recording(),
            TriggerOutcome::Started(GestureRole::Recorded)
        );
        for i in 0..N {
            capture.push(sample(i)).unwrap();
        }
    }

    #[test]
    fn test_initial_state() {
        let capture = GestureCapture::new(&params());
        assert_eq!(capture.state(), CaptureState::Idle);
        assert!(!capture.has_recording());
        assert_eq!(capture.sample_count(), N);
    }

    #[test]
    fn test_push_while_idle_is_dropped() {
        let mut capture = GestureCapture::new(&params());
        assert_eq!(capture.push(sample(1)), Ok(CaptureEvent::Idle));
        assert!(capture.recorded().is_empty());
    }

    #[test]
    fn test_recording_fills_and_returns_idle() {
        let mut capture = GestureCapture::new(&params());
        capture.start_recording();

        for i in 0..N - 1 {
            let event = capture.push(sample(i)).unwrap();
            assert_eq!(
                event,
                CaptureEvent::Progress {
                    role: GestureRole::Recorded,
                    count: i + 1,
                    target: N
                }
            );
            assert_eq!(capture.state(), CaptureState::Recording { cursor: i + 1 });
        }

        assert_eq!(capture.push(sample(N - 1)), Ok(CaptureEvent::RecordingStored));
        assert_eq!(capture.state(), CaptureState::Idle);
        assert!(capture.has_recording());
        assert!(capture.recorded().is_complete());
    }

    #[test]
    fn test_unlock_without_recording_is_error() {
        let mut capture = GestureCapture::new(&params());
        assert_eq!(capture.start_unlock(), Err(GestureError::NoRecording));
        assert_eq!(capture.state(), CaptureState::Idle);
    }

    #[test]
    fn test_unlock_trigger_ignored_while_recording() {
        let mut capture = GestureCapture::new(&params());
        capture.start_recording();
        capture.push(sample(0)).unwrap();
        capture.push(sample(1)).unwrap();

        let outcome = capture.trigger(Trigger::StartUnlock).unwrap();
        assert_eq!(
            outcome,
            TriggerOutcome::Ignored(CaptureState::Recording { cursor: 2 })
        );

        for i in 2..N {
            capture.push(sample(i)).unwrap();
        }
        assert!(capture.has_recording());
        let expected: [NormalizedSample; N] = core::array::from_fn(sample);
        assert_eq!(capture.recorded().samples().unwrap(), &expected[..]);
        assert!(capture.challenge().is_empty());
    }

    #[test]
    fn test_recording_trigger_ignored_while_unlocking() {
        let mut capture = GestureCapture::new(&params());
        record(&mut capture);
        capture.start_unlock().unwrap();
        capture.push(sample(0)).unwrap();

        assert_eq!(
            capture.start_recording(),
            TriggerOutcome::Ignored(CaptureState::Unlocking { cursor: 1 })
        );
        assert!(capture.has_recording());
        assert!(capture.recorded().is_complete());
    }

    #[test]
    fn test_matching_unlock_scores_one() {
        let mut capture = GestureCapture::new(&params());
        record(&mut capture);

        assert_eq!(
            capture.start_unlock(),
            Ok(TriggerOutcome::Started(GestureRole::Challenge))
        );
        for i in 0..N - 1 {
            assert!(matches!(
                capture.push(sample(i)),
                Ok(CaptureEvent::Progress {
                    role: GestureRole::Challenge,
                    ..
                })
            ));
        }

        match capture.push(sample(N - 1)).unwrap() {
            CaptureEvent::UnlockAttempt(result) => {
                assert_eq!(result.score, 1.0);
                assert!(result.matched);
            }
            other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(capture.state(), CaptureState::Idle);
        assert!(capture.has_recording());
    }

    #[test]
    fn test_mismatching_unlock_fails() {
        let mut capture = GestureCapture::new(&params());
        record(&mut capture);
        capture.start_unlock().unwrap();

        let mut last = CaptureEvent::Idle;
        for _ in 0..N {
            last = capture.push(Vector3::new(-0.9, 0.9, -0.9)).unwrap();
        }

        match last {
            CaptureEvent::UnlockAttempt(result) => assert!(!result.matched),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_new_recording_discards_previous() {
        let mut capture = GestureCapture::new(&params());
        record(&mut capture);

        capture.start_recording();
        assert!(!capture.has_recording());
        assert!(capture.recorded().is_empty());
        assert_eq!(capture.start_unlock(), Ok(TriggerOutcome::Ignored(capture.state())));
    }

    #[test]
    fn test_abort_challenge_keeps_recording() {
        let mut capture = GestureCapture::new(&params());
        record(&mut capture);
        capture.start_unlock().unwrap();
        capture.push(sample(0)).unwrap();

        assert_eq!(capture.abort(), Some(GestureRole::Challenge));
        assert_eq!(capture.state(), CaptureState::Idle);
        assert!(capture.challenge().is_empty());
        assert!(capture.has_recording());
        assert!(capture.recorded().is_complete());
    }

    #[test]
    fn test_abort_recording_leaves_none() {
        let mut capture = GestureCapture::new(&params());
        capture.start_recording();
        capture.push(sample(0)).unwrap();

        assert_eq!(capture.abort(), Some(GestureRole::Recorded));
        assert!(!capture.has_recording());
        assert!(capture.recorded().is_empty());
        assert_eq!(capture.start_unlock(), Err(GestureError::NoRecording));
    }

    #[test]
    fn test_abort_when_idle() {
        let mut capture = GestureCapture::new(&params());
        assert_eq!(capture.abort(), None);
    }

    #[test]
    fn test_repeat_unlock_reuses_recording() {
        let mut capture = GestureCapture::new(&params());
        record(&mut capture);

        for _ in 0..2 {
            capture.start_unlock().unwrap();
            let mut last = CaptureEvent::Idle;
            for i in 0..N {
                last = capture.push(sample(i)).unwrap();
            }
            assert!(matches!(last, CaptureEvent::UnlockAttempt(r) if r.matched));
        }
    }
}
