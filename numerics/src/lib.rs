//! # ASVCore Numerics Module
//!
//! Small numeric primitives shared by the wave and ASV crates: a seeded,
//! reproducible RNG for spectrum phase sampling, and the semi-implicit Euler
//! integration step used by the ASV dynamics loop.

pub mod integration;
pub mod rng;

pub use integration::*;
pub use rng::*;

use thiserror::Error;

/// Error types for numerics operations
#[derive(Error, Debug)]
pub enum NumericsError {
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },
}

/// Result type for numerics operations
pub type Result<T> = std::result::Result<T, NumericsError>;
