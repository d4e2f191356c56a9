//! Operations module
//!
//! Coordinates the integration steps and combines their reports

pub mod integrate;

pub use integrate::*;
