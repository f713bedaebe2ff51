//! Six-degree-of-freedom rigid body vector

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Number of degrees of freedom tracked per rigid body.
pub const ELEMENTS: usize = 6;

/// `(surge, sway, heave, roll, pitch, yaw)`.
///
/// Surge/sway/heave are linear (metres, m/s, m/s², or newtons depending on
/// context); roll/pitch/yaw are Euler angles in radians (small-angle regime),
/// angular velocities/accelerations, or moments in newton-metres. Used
/// uniformly for force, acceleration, velocity and displacement state per
/// spec.md §3.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RigidBodyDOF {
    pub surge: f64,
    pub sway: f64,
    pub heave: f64,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl RigidBodyDOF {
    pub fn new(surge: f64, sway: f64, heave: f64, roll: f64, pitch: f64, yaw: f64) -> Self {
        Self {
            surge,
            sway,
            heave,
            roll,
            pitch,
            yaw,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn as_array(&self) -> [f64; ELEMENTS] {
        [
            self.surge,
            self.sway,
            self.heave,
            self.roll,
            self.pitch,
            self.yaw,
        ]
    }

    pub fn from_array(a: [f64; ELEMENTS]) -> Self {
        Self::new(a[0], a[1], a[2], a[3], a[4], a[5])
    }

    /// Elementwise product against another 6-vector (used to apply a
    /// diagonal matrix stored as a `RigidBodyDOF`).
    pub fn elementwise_mul(&self, rhs: &RigidBodyDOF) -> RigidBodyDOF {
        RigidBodyDOF::from_array(std::array::from_fn(|i| {
            self.as_array()[i] * rhs.as_array()[i]
        }))
    }

    /// Elementwise division, used to apply the inverse of a diagonal mass matrix.
    pub fn elementwise_div(&self, rhs: &RigidBodyDOF) -> RigidBodyDOF {
        RigidBodyDOF::from_array(std::array::from_fn(|i| {
            self.as_array()[i] / rhs.as_array()[i]
        }))
    }
}

impl Add for RigidBodyDOF {
    type Output = RigidBodyDOF;
    fn add(self, rhs: RigidBodyDOF) -> RigidBodyDOF {
        RigidBodyDOF::from_array(std::array::from_fn(|i| {
            self.as_array()[i] + rhs.as_array()[i]
        }))
    }
}

impl Sub for RigidBodyDOF {
    type Output = RigidBodyDOF;
    fn sub(self, rhs: RigidBodyDOF) -> RigidBodyDOF {
        RigidBodyDOF::from_array(std::array::from_fn(|i| {
            self.as_array()[i] - rhs.as_array()[i]
        }))
    }
}

impl Neg for RigidBodyDOF {
    type Output = RigidBodyDOF;
    fn neg(self) -> RigidBodyDOF {
        RigidBodyDOF::from_array(self.as_array().map(|v| -v))
    }
}

impl Mul<f64> for RigidBodyDOF {
    type Output = RigidBodyDOF;
    fn mul(self, rhs: f64) -> RigidBodyDOF {
        RigidBodyDOF::from_array(self.as_array().map(|v| v * rhs))
    }
}
