//! Gesture lock controller
//!
//! Owns the gyroscope and timer, and runs the record / unlock cycle one
//! sample per tick. Touch input and display output are supplied by the
//! caller through [`TouchInput`] and [`LockDisplay`].

pub mod controller;
pub mod error;
pub mod io;

pub use controller::{LockController, TickReport, UnlockOutcome};
pub use error::LockError;
pub use io::{LockDisplay, LockStatus, Region, TouchInput, TouchPoint, TouchRegions};
