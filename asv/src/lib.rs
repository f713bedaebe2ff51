//! # ASVCore ASV
//!
//! Six-degree-of-freedom rigid body dynamics for small autonomous surface
//! vehicles and wave-glider craft: vessel specification, thruster array,
//! per-tick force assembly (wave excitation, propulsion, drag, hydrostatic
//! restoring, and wave-glider passive thrust), and the [`AsvEngine`] that
//! ties them together against a shared [`asvcore_waves::SeaSurface`].
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use asvcore_asv::{AsvEngine, AsvSpec};
//! use asvcore_geometry::Coord3D;
//! use asvcore_waves::SeaSurface;
//!
//! let spec = AsvSpec::new(2.1, 0.6, 0.8, 0.3, 2.5, 300.0, 0.3, 0.6, 0.6, Coord3D::zero(), 0.2)?;
//! let sea = Arc::new(SeaSurface::new(1.0, 0.0, 7, 8, 16)?);
//! let mut engine = AsvEngine::new(spec, sea, Coord3D::zero(), Coord3D::zero(), 40.0)?;
//! engine.compute_dynamics(0.04)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use thiserror::Error;

pub mod dynamics;
mod engine;
mod spec;
mod state;
mod thruster;

pub use engine::AsvEngine;
pub use spec::AsvSpec;
pub use state::AsvState;
pub use thruster::{ThrustOrientation, Thruster};

/// Errors produced by this crate's constructors and setters.
#[derive(Debug, Error)]
pub enum AsvError {
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },

    #[error("invalid state: {message}")]
    InvalidState { message: String },

    #[error("out of range: {message}")]
    OutOfRange { message: String },
}

impl From<asvcore_numerics::NumericsError> for AsvError {
    fn from(err: asvcore_numerics::NumericsError) -> Self {
        match err {
            asvcore_numerics::NumericsError::InvalidParameter { message } => {
                AsvError::InvalidParameter { message }
            }
        }
    }
}

impl From<asvcore_waves::WaveError> for AsvError {
    fn from(err: asvcore_waves::WaveError) -> Self {
        match err {
            asvcore_waves::WaveError::InvalidParameter { message } => {
                AsvError::InvalidParameter { message }
            }
            asvcore_waves::WaveError::OutOfRange { message } => AsvError::OutOfRange { message },
        }
    }
}

/// This crate's `Result` alias.
pub type Result<T> = std::result::Result<T, AsvError>;
