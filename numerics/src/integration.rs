//! Semi-implicit Euler integration primitive

use crate::{NumericsError, Result};

/// Advance a single scalar state `(x, v)` under acceleration `a` by `dt`
/// seconds using semi-implicit (symplectic) Euler: velocity updates first,
/// then position uses the *new* velocity. This is the scheme spec.md §4.4
/// step 7 calls out as "sufficient and matches legacy behaviour", and unlike
/// explicit Euler it does not pump energy into an undamped oscillator.
///
/// Returns `(new_x, new_v)`. Fails with [`NumericsError::InvalidParameter`]
/// if `dt` is not strictly positive.
pub fn semi_implicit_euler_step(x: f64, v: f64, a: f64, dt: f64) -> Result<(f64, f64)> {
    if !(dt > 0.0) {
        return Err(NumericsError::InvalidParameter {
            message: format!("timestep must be positive, got {dt}"),
        });
    }
    let new_v = v + a * dt;
    let new_x = x + new_v * dt;
    Ok((new_x, new_v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_acceleration_holds_velocity() {
        let (x, v) = semi_implicit_euler_step(0.0, 1.0, 0.0, 0.04).unwrap();
        assert_relative_eq!(v, 1.0);
        assert_relative_eq!(x, 0.04);
    }

    #[test]
    fn rejects_non_positive_dt() {
        assert!(semi_implicit_euler_step(0.0, 0.0, 0.0, 0.0).is_err());
        assert!(semi_implicit_euler_step(0.0, 0.0, 0.0, -1.0).is_err());
    }

    #[test]
    fn undamped_spring_does_not_blow_up() {
        // a = -k * x / m, a harmonic oscillator: energy should stay bounded
        // over many steps rather than grow without bound.
        let k = 1.0;
        let m = 1.0;
        let dt = 0.01;
        let mut x = 1.0;
        let mut v = 0.0;
        let mut max_energy = 0.0_f64;
        for _ in 0..100_000 {
            let a = -k * x / m;
            let (new_x, new_v) = semi_implicit_euler_step(x, v, a, dt).unwrap();
            x = new_x;
            v = new_v;
            let energy = 0.5 * m * v * v + 0.5 * k * x * x;
            max_energy = max_energy.max(energy);
        }
        // Symplectic Euler has bounded energy drift, not exact conservation.
        assert!(max_energy < 1.0 * 1.01, "energy grew unboundedly: {max_energy}");
    }
}
