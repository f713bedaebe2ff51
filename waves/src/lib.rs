//! # ASVCore Waves Module
//!
//! Directional Bretschneider sea-surface spectrum built from phase-randomised
//! regular wave components.
//!
//! This module provides the stochastic sea-state model consumed by the ASV
//! dynamics crate: a single sinusoidal [`RegularWave`] component, and the
//! [`SeaSurface`] directional spectrum that sums many of them.
//!
//! ## Example
//!
//! ```rust
//! use asvcore_waves::SeaSurface;
//! use asvcore_geometry::Coord3D;
//!
//! let sea = SeaSurface::new(1.5, 0.0, 42, 8, 16).unwrap();
//! let elevation = sea.elevation(Coord3D::zero(), 0.0);
//! println!("H_s = {}, elevation at t=0: {elevation}", sea.significant_wave_height());
//! ```

pub mod regular_wave;
pub mod sea_surface;

pub use regular_wave::*;
pub use sea_surface::*;

use thiserror::Error;

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Water density (kg/m³).
pub const WATER_DENSITY: f64 = 1025.0;

/// Error types for wave and sea-surface operations
#[derive(Error, Debug)]
pub enum WaveError {
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    #[error("Index out of range: {message}")]
    OutOfRange { message: String },
}

/// Result type for wave and sea-surface operations
pub type Result<T> = std::result::Result<T, WaveError>;
