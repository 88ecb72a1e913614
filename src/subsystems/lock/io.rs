//! Touch and display collaborators
//!
//! The controller polls a [`TouchInput`] once per tick and maps the point
//! through [`TouchRegions`] to a capture trigger. Everything it has to show
//! goes through [`LockDisplay`].

use gyro_lock_core::gesture::{GestureRole, SimilarityResult, Trigger};
use gyro_lock_core::ConditionedSample;

/// One touch reading in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Touch controllers report a zero coordinate when nothing is pressed
    pub fn is_pressed(&self) -> bool {
        self.x != 0 && self.y != 0
    }
}

/// Source of touch readings
pub trait TouchInput {
    /// Latest touch point, if any
    fn poll(&mut self) -> Option<TouchPoint>;
}

/// Rectangular screen area with exclusive bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x_min: u16,
    pub x_max: u16,
    pub y_min: u16,
    pub y_max: u16,
}

impl Region {
    pub const fn new(x_min: u16, x_max: u16, y_min: u16, y_max: u16) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn contains(&self, point: TouchPoint) -> bool {
        point.x > self.x_min && point.x < self.x_max && point.y > self.y_min && point.y < self.y_max
    }
}

/// Screen areas acting as the record and unlock buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchRegions {
    pub record: Region,
    pub unlock: Region,
}

impl Default for TouchRegions {
    fn default() -> Self {
        Self {
            record: Region::new(130, 220, 10, 50),
            unlock: Region::new(20, 110, 10, 50),
        }
    }
}

impl TouchRegions {
    /// Trigger for a touch point, `None` outside both buttons
    pub fn map(&self, point: TouchPoint) -> Option<Trigger> {
        if !point.is_pressed() {
            return None;
        }
        if self.record.contains(point) {
            Some(Trigger::StartRecording)
        } else if self.unlock.contains(point) {
            Some(Trigger::StartUnlock)
        } else {
            None
        }
    }
}

/// Status line shown by the display
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LockStatus {
    Calibrating,
    Ready,
    Recording,
    Unlocking,
    RecordingStored,
    Unlocked(SimilarityResult),
    UnlockFailed(SimilarityResult),
    /// Unlock pressed before anything was recorded
    NoRecording,
    /// Capture abandoned after a sensor failure
    CaptureAborted(GestureRole),
}

impl LockStatus {
    pub fn message(&self) -> &'static str {
        match self {
            LockStatus::Calibrating => "Calibrating",
            LockStatus::Ready => "Ready",
            LockStatus::Recording => "Recording",
            LockStatus::Unlocking => "Unlocking",
            LockStatus::RecordingStored => "Recording stored",
            LockStatus::Unlocked(_) => "Successfully unlocked",
            LockStatus::UnlockFailed(_) => "Failed to unlock",
            LockStatus::NoRecording => "No recording",
            LockStatus::CaptureAborted(_) => "Sensor error",
        }
    }
}

/// Output side of the lock
pub trait LockDisplay {
    /// Live angular rate readout, called once per tick
    fn show_sample(&mut self, sample: &ConditionedSample);

    /// Samples captured so far for the running gesture
    fn show_progress(&mut self, role: GestureRole, count: usize, target: usize);

    fn show_status(&mut self, status: LockStatus);
}
