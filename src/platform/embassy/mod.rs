//! Embassy-backed platform services (feature `embassy`)

pub mod timer;

pub use timer::EmbassyTimer;
