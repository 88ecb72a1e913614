//! gyro_lock_core - Pure no_std logic for the gyroscope gesture lock
//!
//! This crate contains the platform-agnostic pipeline between raw sensor
//! counts and an unlock decision. It can be tested on host without any
//! feature flags or hardware dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **No I/O**: Sensor access and timing are injected by the caller
//!
//! # Modules
//!
//! - [`sample`]: Raw, conditioned and normalized sample types
//! - [`calibration`]: Bias estimation from samples taken at rest
//! - [`conditioner`]: Bias correction, dps conversion and normalization
//! - [`gesture`]: Gesture buffers, capture state machine and scoring
//! - [`parameters`]: Parameter store and typed parameter groups

#![no_std]

pub mod calibration;
pub mod conditioner;
pub mod gesture;
pub mod parameters;
pub mod sample;

pub use calibration::{estimate_bias, BiasAccumulator};
pub use conditioner::SampleConditioner;
pub use sample::{Bias, ConditionedSample, NormalizedSample, RawSample};
