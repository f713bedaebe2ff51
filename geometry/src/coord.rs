//! 3-D coordinate type

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A `(x, y, z)` real triple.
///
/// Interpreted as either an earth-fixed position or a body-fixed offset,
/// depending on context — this type carries no frame tag, matching the
/// teacher's `BodyPose` convention of plain `[f64; 3]` fields.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coord3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coord3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Cross product, `self x rhs`.
    pub fn cross(&self, rhs: &Coord3D) -> Coord3D {
        Coord3D::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl Add for Coord3D {
    type Output = Coord3D;
    fn add(self, rhs: Coord3D) -> Coord3D {
        Coord3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Coord3D {
    type Output = Coord3D;
    fn sub(self, rhs: Coord3D) -> Coord3D {
        Coord3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Coord3D {
    type Output = Coord3D;
    fn neg(self) -> Coord3D {
        Coord3D::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Coord3D {
    type Output = Coord3D;
    fn mul(self, rhs: f64) -> Coord3D {
        Coord3D::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cross_product_unit_axes() {
        let x = Coord3D::new(1.0, 0.0, 0.0);
        let y = Coord3D::new(0.0, 1.0, 0.0);
        let z = x.cross(&y);
        assert_relative_eq!(z.x, 0.0);
        assert_relative_eq!(z.y, 0.0);
        assert_relative_eq!(z.z, 1.0);
    }

    #[test]
    fn array_round_trip() {
        let c = Coord3D::new(1.0, 2.0, 3.0);
        assert_eq!(Coord3D::from_array(c.as_array()), c);
    }
}
