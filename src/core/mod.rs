//! Core infrastructure shared by the platform, device and subsystem layers

pub mod logging;
