//! # ASVCore Swarm
//!
//! Parallel stepping of many [`asvcore_asv::AsvEngine`] instances against a
//! shared [`asvcore_waves::SeaSurface`], via a `rayon` thread pool. Vehicles
//! are driven by caller-supplied [`Controller`]/[`Sink`] implementations;
//! this crate owns only the scheduling.
//!
//! ## Example
//!
//! ```rust
//! use asvcore_swarm::{ClockSchedule, SwarmRunner, SyncMode};
//!
//! let schedule = ClockSchedule::new(0.0, 1.0, 0.04)?;
//! let mut runner = SwarmRunner::new(schedule, SyncMode::Barrier);
//! runner.run();
//! assert_eq!(runner.vehicle_count(), 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use thiserror::Error;

mod runner;
mod traits;

pub use runner::{ClockSchedule, SwarmRunner, SyncMode};
pub use traits::{AsvObservation, ControlSignal, Controller, Sink, StepRecord, ThrustCommand};

/// Errors produced by this crate's constructors.
#[derive(Debug, Error)]
pub enum SwarmError {
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },
}

/// This crate's `Result` alias.
pub type Result<T> = std::result::Result<T, SwarmError>;
