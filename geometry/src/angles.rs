//! Angle normalisation helpers

use std::f64::consts::PI;

/// Normalise an angle (radians) to `(-pi, pi]`.
///
/// `-pi` maps to `pi` (the upper bound owns the boundary), matching the
/// tie-break spec.md §4.1 requires.
pub fn normalise_pi(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(2.0 * PI) - PI;
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}

/// Normalise an angle (radians) to `[0, 2*pi)`.
///
/// `2*pi` maps to `0`.
pub fn normalise_2pi(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(2.0 * PI);
    if wrapped >= 2.0 * PI {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn boundary_normalise_pi() {
        assert_relative_eq!(normalise_pi(-PI), PI);
        assert_relative_eq!(normalise_pi(PI), PI);
        assert_relative_eq!(normalise_pi(0.0), 0.0);
    }

    #[test]
    fn boundary_normalise_2pi() {
        assert_relative_eq!(normalise_2pi(2.0 * PI), 0.0);
        assert_relative_eq!(normalise_2pi(0.0), 0.0);
    }

    #[test]
    fn idempotent_examples() {
        for angle in [-10.0, -PI, -1.0, 0.0, 1.0, PI, 10.0] {
            let once = normalise_pi(angle);
            assert_relative_eq!(normalise_pi(once), once, epsilon = 1e-12);

            let once2 = normalise_2pi(angle);
            assert_relative_eq!(normalise_2pi(once2), once2, epsilon = 1e-12);
        }
    }

    proptest! {
        #[test]
        fn normalise_pi_in_range(angle in -1000.0f64..1000.0) {
            let n = normalise_pi(angle);
            prop_assert!(n > -PI - 1e-9 && n <= PI + 1e-9);
        }

        #[test]
        fn normalise_2pi_in_range(angle in -1000.0f64..1000.0) {
            let n = normalise_2pi(angle);
            prop_assert!(n >= -1e-9 && n < 2.0 * PI + 1e-9);
        }

        #[test]
        fn normalise_pi_idempotent(angle in -1000.0f64..1000.0) {
            let once = normalise_pi(angle);
            let twice = normalise_pi(once);
            prop_assert!((once - twice).abs() < 1e-9);
        }

        #[test]
        fn normalise_2pi_idempotent(angle in -1000.0f64..1000.0) {
            let once = normalise_2pi(angle);
            let twice = normalise_2pi(once);
            prop_assert!((once - twice).abs() < 1e-9);
        }
    }
}
