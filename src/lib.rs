//! Genetic search for ±1 sequences with low aperiodic autocorrelation
//! side-lobes.

pub mod config;
pub mod engines;
pub mod error;
pub mod report;

pub use error::{Result, SidelobeError};
