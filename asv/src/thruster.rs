//! Thruster placement and thrust vector

use crate::{AsvError, Result};
use asvcore_geometry::Coord3D;
use serde::{Deserialize, Serialize};

/// A body-frame thrust direction expressed as two angles, rather than a raw
/// unit vector, so a controller can reason about "point the thruster this
/// way" directly — `azimuth` sweeps in the body xy-plane from the +surge
/// axis, `elevation` tilts out of that plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ThrustOrientation {
    /// Rotation about the body z-axis from +surge, radians.
    pub azimuth: f64,
    /// Tilt out of the body xy-plane, radians.
    pub elevation: f64,
}

impl ThrustOrientation {
    pub fn new(azimuth: f64, elevation: f64) -> Self {
        Self { azimuth, elevation }
    }

    /// The body-frame unit vector this orientation points along.
    pub fn as_unit_vector(&self) -> Coord3D {
        Coord3D::new(
            self.elevation.cos() * self.azimuth.cos(),
            self.elevation.cos() * self.azimuth.sin(),
            self.elevation.sin(),
        )
    }
}

/// A single thruster: its fixed body-frame position, and its current
/// commanded direction and magnitude (mutable per tick).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thruster {
    /// Body-frame position.
    pub position: Coord3D,
    /// Current commanded direction.
    pub orientation: ThrustOrientation,
    /// Current commanded thrust magnitude, newtons.
    pub magnitude: f64,
}

impl Thruster {
    /// Construct a thruster at `position` with zero initial thrust. Hull
    /// envelope validation happens in `AsvEngine::set_thrusters`, which
    /// knows the vessel's dimensions; a bare `Thruster` has no opinion about
    /// where it's allowed to sit.
    pub fn new(position: Coord3D) -> Self {
        Self {
            position,
            orientation: ThrustOrientation::default(),
            magnitude: 0.0,
        }
    }

    /// Set this thruster's direction and magnitude.
    ///
    /// Fails with [`AsvError::InvalidParameter`] if `magnitude < 0`.
    pub fn set_thrust(&mut self, orientation: ThrustOrientation, magnitude: f64) -> Result<()> {
        if magnitude < 0.0 {
            return Err(AsvError::InvalidParameter {
                message: format!("thrust magnitude must be >= 0, got {magnitude}"),
            });
        }
        self.orientation = orientation;
        self.magnitude = magnitude;
        Ok(())
    }

    /// The current thrust force vector in the body frame.
    pub fn force_vector(&self) -> Coord3D {
        self.orientation.as_unit_vector() * self.magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unit_vector_along_surge_axis() {
        let o = ThrustOrientation::new(0.0, 0.0);
        let v = o.as_unit_vector();
        assert_relative_eq!(v.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_negative_magnitude() {
        let mut t = Thruster::new(Coord3D::zero());
        assert!(t.set_thrust(ThrustOrientation::default(), -1.0).is_err());
        assert!(t.set_thrust(ThrustOrientation::default(), 0.0).is_ok());
    }

    #[test]
    fn force_vector_scales_with_magnitude() {
        let mut t = Thruster::new(Coord3D::zero());
        t.set_thrust(ThrustOrientation::new(0.0, 0.0), 10.0).unwrap();
        let f = t.force_vector();
        assert_relative_eq!(f.x, 10.0, epsilon = 1e-9);
    }
}
