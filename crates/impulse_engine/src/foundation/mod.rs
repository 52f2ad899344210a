//! Foundation utilities shared by every subsystem.

pub mod logging;
pub mod math;
