//! # ASVCore Geometry Module
//!
//! Pure coordinate and 6-DOF vector types shared by the wave, ASV and swarm
//! crates. No allocation, no fallible operations — everything here is value
//! math.
//!
//! ## Example
//!
//! ```rust
//! use asvcore_geometry::{Coord3D, RigidBodyDOF, normalise_pi};
//!
//! let position = Coord3D::new(10.0, 0.0, -0.5);
//! let force = RigidBodyDOF::new(100.0, 0.0, 0.0, 0.0, 0.0, 0.0);
//! let heading = normalise_pi(3.5 * std::f64::consts::PI);
//! println!("{:?} {:?} {heading}", position, force);
//! ```

pub mod angles;
pub mod coord;
pub mod dof;

pub use angles::*;
pub use coord::*;
pub use dof::*;
