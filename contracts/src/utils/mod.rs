//! Common Smart Contracts utilities.
pub mod math;
