//! Lock controller
//!
//! Each tick reads one sample, feeds it to the running capture and then
//! handles at most one touch. A trigger raised by touch therefore takes
//! effect from the next tick's sample onwards.
//!
//! ```text
//! read_axes -> condition -> display -> capture.push -> touch -> trigger
//! ```
//!
//! A failed read abandons the running capture. The controller never
//! retries on its own; the next tick simply tries again.

use super::error::LockError;
use super::io::{LockDisplay, LockStatus, TouchInput, TouchRegions};
use crate::devices::traits::GyroSensor;
use crate::platform::TimerInterface;
use crate::subsystems::calibration::calibrate;
use gyro_lock_core::gesture::{
    CaptureEvent, GestureCapture, GestureError, GestureRole, SimilarityResult, Trigger,
    TriggerOutcome,
};
use gyro_lock_core::parameters::LockParams;
use gyro_lock_core::{Bias, ConditionedSample, SampleConditioner};

/// Verdict of a completed unlock attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnlockOutcome {
    Matched(SimilarityResult),
    Mismatched(SimilarityResult),
}

impl UnlockOutcome {
    fn from_result(result: SimilarityResult) -> Self {
        if result.matched {
            UnlockOutcome::Matched(result)
        } else {
            UnlockOutcome::Mismatched(result)
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, UnlockOutcome::Matched(_))
    }

    pub fn result(&self) -> &SimilarityResult {
        match self {
            UnlockOutcome::Matched(result) | UnlockOutcome::Mismatched(result) => result,
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// The sample read this tick
    pub sample: ConditionedSample,
    /// Capture step taken with the sample
    pub event: CaptureEvent,
    /// Set when this tick completed an unlock attempt
    pub outcome: Option<UnlockOutcome>,
    /// Set when a touch landed on a button
    pub trigger: Option<Result<TriggerOutcome, GestureError>>,
}

/// Gesture lock controller
pub struct LockController<G: GyroSensor, T: TimerInterface> {
    gyro: G,
    timer: T,
    params: LockParams,
    conditioner: SampleConditioner,
    capture: GestureCapture,
    regions: TouchRegions,
    started: bool,
}

impl<G: GyroSensor, T: TimerInterface> LockController<G, T> {
    /// Create a controller
    ///
    /// # Arguments
    ///
    /// * `gyro` - Sensor, configured by [`start`](Self::start)
    /// * `timer` - Used for calibration spacing and the loop period
    /// * `params` - Capture, calibration and loop settings
    /// * `gyro_sensitivity` - Degrees per second per LSB
    pub fn new(gyro: G, timer: T, params: LockParams, gyro_sensitivity: f32) -> Self {
        Self {
            gyro,
            timer,
            capture: GestureCapture::new(&params.gesture),
            conditioner: SampleConditioner::new(gyro_sensitivity),
            params,
            regions: TouchRegions::default(),
            started: false,
        }
    }

    /// Replace the default button layout
    pub fn with_regions(mut self, regions: TouchRegions) -> Self {
        self.regions = regions;
        self
    }

    pub fn gyro(&self) -> &G {
        &self.gyro
    }

    pub fn gyro_mut(&mut self) -> &mut G {
        &mut self.gyro
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn params(&self) -> &LockParams {
        &self.params
    }

    pub fn capture(&self) -> &GestureCapture {
        &self.capture
    }

    pub fn conditioner(&self) -> &SampleConditioner {
        &self.conditioner
    }

    pub fn regions(&self) -> &TouchRegions {
        &self.regions
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Configure the sensor and run the initial calibration
    ///
    /// Must succeed before [`tick`](Self::tick) accepts work. On failure
    /// the controller stays unstarted and `start` may be called again.
    /// Once started, further calls return the current bias and leave the
    /// sensor and any running capture alone; use
    /// [`recalibrate`](Self::recalibrate) to refresh the bias.
    pub fn start(&mut self) -> Result<Bias, LockError> {
        if self.started {
            if let Some(bias) = self.conditioner.bias() {
                return Ok(*bias);
            }
        }

        self.gyro.configure()?;
        let bias = calibrate(&mut self.gyro, &mut self.timer, &self.params.calibration)?;
        self.conditioner.set_bias(bias);
        self.started = true;
        crate::log_info!("Gesture lock ready");
        Ok(bias)
    }

    /// Re-run calibration between captures
    ///
    /// The current bias stays in place if the run fails.
    pub fn recalibrate(&mut self) -> Result<Bias, LockError> {
        if !self.started {
            return Err(LockError::NotStarted);
        }
        if !self.capture.state().is_idle() {
            return Err(LockError::Busy);
        }

        let bias = calibrate(&mut self.gyro, &mut self.timer, &self.params.calibration)?;
        self.conditioner.set_bias(bias);
        Ok(bias)
    }

    /// Start a capture without going through touch input
    pub fn trigger(&mut self, trigger: Trigger) -> Result<TriggerOutcome, LockError> {
        if !self.started {
            return Err(LockError::NotStarted);
        }
        Ok(self.start_capture(trigger)?)
    }

    /// Run one control cycle
    ///
    /// # Errors
    ///
    /// A failed read aborts the running capture and is returned. An unlock
    /// touch with nothing recorded is not an error here; it is reported in
    /// [`TickReport::trigger`] and on the display.
    pub fn tick<I, D>(&mut self, touch: &mut I, display: &mut D) -> Result<TickReport, LockError>
    where
        I: TouchInput,
        D: LockDisplay,
    {
        if !self.started {
            return Err(LockError::NotStarted);
        }

        let raw = match self.gyro.read_axes() {
            Ok(raw) => raw,
            Err(e) => {
                crate::log_error!("Gyro read failed: {}", e);
                if !self.gyro.is_healthy() {
                    crate::log_warn!("Gyro unhealthy");
                }
                self.abort_capture(display);
                return Err(e.into());
            }
        };

        let sample = self.conditioner.condition(raw);
        display.show_sample(&sample);

        let event = match self.capture.push(SampleConditioner::normalize(&sample)) {
            Ok(event) => event,
            Err(e) => {
                crate::log_error!("Capture step failed");
                self.abort_capture(display);
                return Err(e.into());
            }
        };
        let outcome = self.report_event(event, display);

        let trigger = touch
            .poll()
            .and_then(|point| self.regions.map(point))
            .map(|trigger| {
                let result = self.start_capture(trigger);
                self.report_trigger(&result, display);
                result
            });

        Ok(TickReport {
            sample,
            event,
            outcome,
            trigger,
        })
    }

    /// Tick forever at the configured period
    ///
    /// Calibrates first if [`start`](Self::start) has not succeeded yet,
    /// retrying every period until it does.
    pub fn run<I, D>(&mut self, touch: &mut I, display: &mut D) -> !
    where
        I: TouchInput,
        D: LockDisplay,
    {
        let period_ms = self.params.control_loop.period_ms;
        loop {
            if !self.started {
                display.show_status(LockStatus::Calibrating);
                match self.start() {
                    Ok(_) => display.show_status(LockStatus::Ready),
                    Err(e) => crate::log_error!("Start failed: {}", e),
                }
            } else if let Err(e) = self.tick(touch, display) {
                crate::log_warn!("Tick failed: {}", e);
            }

            if let Err(e) = self.timer.delay_ms(period_ms) {
                crate::log_error!("Loop delay failed: {}", e);
            }
        }
    }

    fn start_capture(&mut self, trigger: Trigger) -> Result<TriggerOutcome, GestureError> {
        let result = self.capture.trigger(trigger);
        match &result {
            Ok(TriggerOutcome::Started(role)) => {
                crate::log_info!("{} capture started", role.name());
            }
            Ok(TriggerOutcome::Ignored(state)) => {
                crate::log_debug!("Trigger ignored while {}", state.name());
            }
            Err(_) => {
                crate::log_warn!("Unlock requested with nothing recorded");
            }
        }
        result
    }

    fn report_trigger<D: LockDisplay>(
        &self,
        result: &Result<TriggerOutcome, GestureError>,
        display: &mut D,
    ) {
        match result {
            Ok(TriggerOutcome::Started(role)) => {
                let status = match role {
                    GestureRole::Recorded => LockStatus::Recording,
                    GestureRole::Challenge => LockStatus::Unlocking,
                };
                display.show_status(status);
                display.show_progress(*role, 0, self.capture.sample_count());
            }
            Ok(TriggerOutcome::Ignored(_)) => {}
            Err(GestureError::NoRecording) => display.show_status(LockStatus::NoRecording),
            Err(_) => {}
        }
    }

    fn report_event<D: LockDisplay>(
        &self,
        event: CaptureEvent,
        display: &mut D,
    ) -> Option<UnlockOutcome> {
        match event {
            CaptureEvent::Idle => None,
            CaptureEvent::Progress {
                role,
                count,
                target,
            } => {
                display.show_progress(role, count, target);
                None
            }
            CaptureEvent::RecordingStored => {
                crate::log_info!("Recording stored ({} samples)", self.capture.sample_count());
                display.show_status(LockStatus::RecordingStored);
                None
            }
            CaptureEvent::UnlockAttempt(result) => {
                let b = &result.breakdown;
                crate::log_info!(
                    "Similarity {}: mse {} ({}), energy {} vs {} ({}), sign diff {} ({})",
                    result.score,
                    b.mse,
                    b.mse_score,
                    b.energy_a,
                    b.energy_b,
                    b.energy_score,
                    b.sign_diff,
                    b.sign_score
                );

                let outcome = UnlockOutcome::from_result(result);
                if outcome.is_match() {
                    crate::log_info!("Unlocked");
                    display.show_status(LockStatus::Unlocked(result));
                } else {
                    crate::log_info!("Unlock rejected");
                    display.show_status(LockStatus::UnlockFailed(result));
                }
                Some(outcome)
            }
        }
    }

    fn abort_capture<D: LockDisplay>(&mut self, display: &mut D) {
        if let Some(role) = self.capture.abort() {
            crate::log_warn!("{} capture aborted", role.name());
            display.show_status(LockStatus::CaptureAborted(role));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::gyro::MockGyro;
    use crate::devices::traits::GyroError;
    use crate::platform::mock::MockTimer;
    use crate::subsystems::calibration::CalibrationError;
    use crate::subsystems::lock::io::TouchPoint;
    use gyro_lock_core::gesture::CaptureState;
    use gyro_lock_core::parameters::{CalibrationParams, GestureParams};
    use gyro_lock_core::RawSample;
    use std::collections::VecDeque;
    use std::vec::Vec;

    const N: usize = 5;
    const REST: RawSample = RawSample::new(10, -20, 5);
    const RECORD: TouchPoint = TouchPoint::new(175, 30);
    const UNLOCK: TouchPoint = TouchPoint::new(60, 30);

    #[derive(Default)]
    struct ScriptedTouch {
        points: VecDeque<TouchPoint>,
    }

    impl ScriptedTouch {
        fn press(&mut self, point: TouchPoint) {
            self.points.push_back(point);
        }
    }

    impl TouchInput for ScriptedTouch {
        fn poll(&mut self) -> Option<TouchPoint> {
            self.points.pop_front()
        }
    }

    #[derive(Default)]
    struct RecordingDisplay {
        samples: usize,
        progress: Vec<(GestureRole, usize, usize)>,
        statuses: Vec<LockStatus>,
    }

    impl LockDisplay for RecordingDisplay {
        fn show_sample(&mut self, _sample: &ConditionedSample) {
            self.samples += 1;
        }

        fn show_progress(&mut self, role: GestureRole, count: usize, target: usize) {
            self.progress.push((role, count, target));
        }

        fn show_status(&mut self, status: LockStatus) {
            self.statuses.push(status);
        }
    }

    fn params() -> LockParams {
        LockParams {
            gesture: GestureParams {
                sample_count: N,
                ..GestureParams::default()
            },
            calibration: CalibrationParams {
                sample_count: 4,
                delay_ms: 1,
            },
            ..LockParams::default()
        }
    }

    fn started() -> LockController<MockGyro, MockTimer> {
        let gyro = MockGyro::with_default_reading(REST);
        let sensitivity = gyro.sensitivity();
        let mut lock = LockController::new(gyro, MockTimer::new(), params(), sensitivity);
        lock.start().unwrap();
        lock
    }

    fn offset(x: i16, y: i16, z: i16) -> RawSample {
        RawSample::new(REST.x + x, REST.y + y, REST.z + z)
    }

    /// Press `point`, then tick until the capture it starts completes
    fn capture(
        lock: &mut LockController<MockGyro, MockTimer>,
        display: &mut RecordingDisplay,
        point: TouchPoint,
        reading: RawSample,
    ) -> TickReport {
        let mut touch = ScriptedTouch::default();
        touch.press(point);
        lock.tick(&mut touch, display).unwrap();

        lock.gyro_mut().set_default_reading(reading);
        let mut report = None;
        for _ in 0..N {
            report = Some(lock.tick(&mut touch, display).unwrap());
        }
        lock.gyro_mut().set_default_reading(REST);
        report.unwrap()
    }

    #[test]
    fn test_start_configures_and_calibrates() {
        let lock = started();

        assert!(lock.is_started());
        assert_eq!(lock.gyro().configure_count(), 1);
        assert_eq!(lock.gyro().read_count(), 4);
        assert_eq!(lock.conditioner().bias(), Some(&Bias::new(10.0, -20.0, 5.0)));
        assert_eq!(lock.timer().now_ms(), 3);
    }

    #[test]
    fn test_tick_before_start() {
        let gyro = MockGyro::with_default_reading(REST);
        let mut lock = LockController::new(gyro, MockTimer::new(), params(), 8.75e-3);
        let mut touch = ScriptedTouch::default();
        let mut display = RecordingDisplay::default();

        assert_eq!(
            lock.tick(&mut touch, &mut display),
            Err(LockError::NotStarted)
        );
        assert_eq!(
            lock.trigger(Trigger::StartRecording),
            Err(LockError::NotStarted)
        );
    }

    #[test]
    fn test_start_failure_keeps_unstarted() {
        let mut gyro = MockGyro::with_default_reading(REST);
        gyro.fail_next(1);
        let mut lock = LockController::new(gyro, MockTimer::new(), params(), 8.75e-3);

        assert_eq!(
            lock.start(),
            Err(LockError::Gyro(GyroError::TransportTimeout))
        );
        assert!(!lock.is_started());
        assert!(lock.conditioner().bias().is_none());

        assert!(lock.start().is_ok());
        assert!(lock.is_started());
    }

    #[test]
    fn test_start_empty_calibration_window() {
        let gyro = MockGyro::with_default_reading(REST);
        let mut params = params();
        params.calibration.sample_count = 0;
        let mut lock = LockController::new(gyro, MockTimer::new(), params, 8.75e-3);

        assert_eq!(
            lock.start(),
            Err(LockError::Calibration(CalibrationError::NoSamples))
        );
        assert!(!lock.is_started());
    }

    #[test]
    fn test_at_rest_conditions_to_zero() {
        let mut lock = started();
        let mut touch = ScriptedTouch::default();
        let mut display = RecordingDisplay::default();

        let report = lock.tick(&mut touch, &mut display).unwrap();
        assert_eq!(report.sample.dps, nalgebra::Vector3::zeros());
        assert_eq!(report.event, CaptureEvent::Idle);
        assert_eq!(report.trigger, None);
        assert_eq!(display.samples, 1);
    }

    #[test]
    fn test_record_then_unlock_matches() {
        let mut lock = started();
        let mut display = RecordingDisplay::default();
        let gesture = offset(8192, -4096, 1024);

        let report = capture(&mut lock, &mut display, RECORD, gesture);
        assert_eq!(report.event, CaptureEvent::RecordingStored);
        assert!(lock.capture().has_recording());
        assert_eq!(display.statuses.last(), Some(&LockStatus::RecordingStored));

        let report = capture(&mut lock, &mut display, UNLOCK, gesture);
        let outcome = report.outcome.unwrap();
        assert!(outcome.is_match());
        assert_eq!(outcome.result().score, 1.0);
        assert!(matches!(
            display.statuses.last(),
            Some(LockStatus::Unlocked(_))
        ));
        assert!(lock.capture().state().is_idle());
    }

    #[test]
    fn test_mirrored_gesture_rejected() {
        let mut lock = started();
        let mut display = RecordingDisplay::default();

        capture(&mut lock, &mut display, RECORD, offset(16384, 16384, 16384));
        let report = capture(&mut lock, &mut display, UNLOCK, offset(-16384, -16384, -16384));

        let outcome = report.outcome.unwrap();
        assert!(!outcome.is_match());
        assert_eq!(outcome.result().breakdown.sign_diff, 3);
        assert!(matches!(
            display.statuses.last(),
            Some(LockStatus::UnlockFailed(_))
        ));
        // recording survives a failed attempt
        assert!(lock.capture().has_recording());
    }

    #[test]
    fn test_progress_reported() {
        let mut lock = started();
        let mut display = RecordingDisplay::default();

        capture(&mut lock, &mut display, RECORD, REST);

        let expected: Vec<_> = (0..N)
            .map(|count| (GestureRole::Recorded, count, N))
            .collect();
        assert_eq!(display.progress, expected);
        assert_eq!(display.statuses[0], LockStatus::Recording);
    }

    #[test]
    fn test_unlock_without_recording() {
        let mut lock = started();
        let mut touch = ScriptedTouch::default();
        let mut display = RecordingDisplay::default();

        touch.press(UNLOCK);
        let report = lock.tick(&mut touch, &mut display).unwrap();

        assert_eq!(report.trigger, Some(Err(GestureError::NoRecording)));
        assert_eq!(display.statuses, [LockStatus::NoRecording]);
        assert!(lock.capture().state().is_idle());
        assert_eq!(
            lock.trigger(Trigger::StartUnlock),
            Err(LockError::Gesture(GestureError::NoRecording))
        );
    }

    #[test]
    fn test_unlock_ignored_while_recording() {
        let mut lock = started();
        let mut touch = ScriptedTouch::default();
        let mut display = RecordingDisplay::default();

        touch.press(RECORD);
        lock.tick(&mut touch, &mut display).unwrap();
        touch.press(UNLOCK);
        let report = lock.tick(&mut touch, &mut display).unwrap();

        assert_eq!(
            report.trigger,
            Some(Ok(TriggerOutcome::Ignored(CaptureState::Recording {
                cursor: 1
            })))
        );
        assert_eq!(lock.capture().state(), CaptureState::Recording { cursor: 1 });
    }

    #[test]
    fn test_touch_outside_buttons() {
        let mut lock = started();
        let mut touch = ScriptedTouch::default();
        let mut display = RecordingDisplay::default();

        touch.press(TouchPoint::new(120, 30));
        touch.press(TouchPoint::new(0, 0));
        assert_eq!(lock.tick(&mut touch, &mut display).unwrap().trigger, None);
        assert_eq!(lock.tick(&mut touch, &mut display).unwrap().trigger, None);
        assert!(display.statuses.is_empty());
    }

    #[test]
    fn test_read_failure_aborts_unlock_keeps_recording() {
        let mut lock = started();
        let mut touch = ScriptedTouch::default();
        let mut display = RecordingDisplay::default();

        capture(&mut lock, &mut display, RECORD, offset(100, 200, 300));
        lock.trigger(Trigger::StartUnlock).unwrap();
        lock.tick(&mut touch, &mut display).unwrap();

        lock.gyro_mut().fail_next(1);
        assert_eq!(
            lock.tick(&mut touch, &mut display),
            Err(LockError::Gyro(GyroError::TransportTimeout))
        );
        assert!(lock.capture().state().is_idle());
        assert!(lock.capture().challenge().is_empty());
        assert!(lock.capture().has_recording());
        assert_eq!(
            display.statuses.last(),
            Some(&LockStatus::CaptureAborted(GestureRole::Challenge))
        );

        // next tick recovers
        assert!(lock.tick(&mut touch, &mut display).is_ok());
    }

    #[test]
    fn test_read_failure_aborts_recording() {
        let mut lock = started();
        let mut touch = ScriptedTouch::default();
        let mut display = RecordingDisplay::default();

        lock.trigger(Trigger::StartRecording).unwrap();
        lock.tick(&mut touch, &mut display).unwrap();
        lock.gyro_mut().fail_next(1);

        assert!(lock.tick(&mut touch, &mut display).is_err());
        assert!(lock.capture().state().is_idle());
        assert!(!lock.capture().has_recording());
        assert!(lock.capture().recorded().is_empty());
    }

    #[test]
    fn test_recalibrate() {
        let mut lock = started();
        lock.gyro_mut().set_default_reading(RawSample::new(1, 2, 3));

        assert_eq!(lock.recalibrate(), Ok(Bias::new(1.0, 2.0, 3.0)));
        assert_eq!(lock.conditioner().bias(), Some(&Bias::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_recalibrate_busy_and_failure() {
        let mut lock = started();
        lock.trigger(Trigger::StartRecording).unwrap();
        assert_eq!(lock.recalibrate(), Err(LockError::Busy));

        let mut lock = started();
        lock.gyro_mut().set_default_reading(RawSample::new(1, 2, 3));
        lock.gyro_mut().fail_next(1);
        assert!(lock.recalibrate().is_err());
        assert_eq!(lock.conditioner().bias(), Some(&Bias::new(10.0, -20.0, 5.0)));
    }

    #[test]
    fn test_start_when_started_keeps_bias() {
        let mut lock = started();
        lock.trigger(Trigger::StartRecording).unwrap();
        lock.gyro_mut().set_default_reading(RawSample::new(1000, 1000, 1000));
        let reads = lock.gyro().read_count();

        assert_eq!(lock.start(), Ok(Bias::new(10.0, -20.0, 5.0)));
        assert_eq!(lock.capture().state(), CaptureState::Recording { cursor: 0 });
        assert_eq!(lock.gyro().configure_count(), 1);
        assert_eq!(lock.gyro().read_count(), reads);
        assert_eq!(lock.conditioner().bias(), Some(&Bias::new(10.0, -20.0, 5.0)));
    }
}
