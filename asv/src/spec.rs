//! Vessel geometric and inertial specification

use crate::{AsvError, Result};
use asvcore_geometry::Coord3D;
use serde::{Deserialize, Serialize};

/// Immutable geometric and inertial description of a vessel.
///
/// All lengths in metres, `displacement` in kilograms (the vessel's mass at
/// its design waterline — for a floating body this equals the mass of
/// displaced water), `max_speed` in m/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsvSpec {
    /// Waterline length.
    pub waterline_length: f64,
    /// Beam (waterline breadth).
    pub beam: f64,
    /// Depth (keel to deck).
    pub depth: f64,
    /// Draft (keel to waterline).
    pub draft: f64,
    /// Maximum forward speed.
    pub max_speed: f64,
    /// Displacement mass (kg).
    pub displacement: f64,
    /// Radius of gyration about the roll axis.
    pub radius_of_gyration_roll: f64,
    /// Radius of gyration about the pitch axis.
    pub radius_of_gyration_pitch: f64,
    /// Radius of gyration about the yaw axis.
    pub radius_of_gyration_yaw: f64,
    /// Centre of gravity offset from the origin, in the body frame.
    pub cog: Coord3D,
    /// Submerged wing area driving wave-glider passive thrust, m^2.
    /// Irrelevant for non-glider hulls but kept on `AsvSpec` rather than
    /// threaded through every dynamics call separately.
    pub wing_area: f64,
}

impl AsvSpec {
    /// Construct a vessel specification.
    ///
    /// Fails with [`AsvError::InvalidParameter`] if any dimension, the
    /// displacement, the max speed, or a radius of gyration is not strictly
    /// positive.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        waterline_length: f64,
        beam: f64,
        depth: f64,
        draft: f64,
        max_speed: f64,
        displacement: f64,
        radius_of_gyration_roll: f64,
        radius_of_gyration_pitch: f64,
        radius_of_gyration_yaw: f64,
        cog: Coord3D,
        wing_area: f64,
    ) -> Result<Self> {
        let fields = [
            ("waterline_length", waterline_length),
            ("beam", beam),
            ("depth", depth),
            ("draft", draft),
            ("max_speed", max_speed),
            ("displacement", displacement),
            ("radius_of_gyration_roll", radius_of_gyration_roll),
            ("radius_of_gyration_pitch", radius_of_gyration_pitch),
            ("radius_of_gyration_yaw", radius_of_gyration_yaw),
            ("wing_area", wing_area),
        ];
        for (name, value) in fields {
            if !(value > 0.0) {
                return Err(AsvError::InvalidParameter {
                    message: format!("{name} must be > 0, got {value}"),
                });
            }
        }
        if draft >= depth {
            return Err(AsvError::InvalidParameter {
                message: format!("draft ({draft}) must be less than depth ({depth})"),
            });
        }

        Ok(Self {
            waterline_length,
            beam,
            depth,
            draft,
            max_speed,
            displacement,
            radius_of_gyration_roll,
            radius_of_gyration_pitch,
            radius_of_gyration_yaw,
            cog,
            wing_area,
        })
    }

    /// Waterplane area, approximated as a rectangle `L * B`.
    pub fn waterplane_area(&self) -> f64 {
        self.waterline_length * self.beam
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_args() -> (f64, f64, f64, f64, f64, f64, f64, f64, f64, Coord3D, f64) {
        (2.1, 0.6, 0.8, 0.3, 2.5, 300.0, 0.3, 0.6, 0.6, Coord3D::zero(), 0.2)
    }

    #[test]
    fn accepts_valid_spec() {
        let a = valid_args();
        assert!(AsvSpec::new(a.0, a.1, a.2, a.3, a.4, a.5, a.6, a.7, a.8, a.9, a.10).is_ok());
    }

    #[test]
    fn rejects_non_positive_dimension() {
        let a = valid_args();
        assert!(AsvSpec::new(-1.0, a.1, a.2, a.3, a.4, a.5, a.6, a.7, a.8, a.9, a.10).is_err());
        assert!(AsvSpec::new(a.0, 0.0, a.2, a.3, a.4, a.5, a.6, a.7, a.8, a.9, a.10).is_err());
    }

    #[test]
    fn rejects_draft_exceeding_depth() {
        let a = valid_args();
        assert!(AsvSpec::new(a.0, a.1, 0.2, 0.3, a.4, a.5, a.6, a.7, a.8, a.9, a.10).is_err());
    }
}
