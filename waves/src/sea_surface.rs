//! Directional Bretschneider sea-surface spectrum

use crate::{RegularWave, Result, WaveError};
use asvcore_geometry::{normalise_pi, Coord3D};
use asvcore_numerics::SeededRng;
use log::debug;
use std::f64::consts::PI;

/// Bretschneider peak-frequency coefficient (Hz, `H_s` in metres). Fully
/// developed sea approximation used throughout the legacy tuning data.
const PEAK_FREQUENCY_COEFFICIENT: f64 = 0.4423;

/// Frequency-range bounds expressed as multiples of the peak frequency.
/// Empirically covers ~99% of the Bretschneider spectrum's energy.
const FREQ_RANGE_LOW_FACTOR: f64 = 0.5;
const FREQ_RANGE_HIGH_FACTOR: f64 = 3.0;

/// Directional, phase-randomised sea-surface model: a `D x F` grid of
/// [`RegularWave`] components whose elevations superpose linearly.
///
/// The grid is stored as one contiguous `Vec<RegularWave>` indexed
/// `d * direction_count + f`, per spec.md §9 ("owned grid, not pointer
/// soup") — this keeps the elevation sum's memory access pattern linear
/// instead of chasing a pointer-to-pointer structure.
#[derive(Debug, Clone)]
pub struct SeaSurface {
    significant_wave_height: f64,
    predominant_heading: f64,
    seed: i64,
    direction_count: usize,
    frequency_count: usize,
    frequency_min: f64,
    frequency_max: f64,
    spectrum: Vec<RegularWave>,
}

impl SeaSurface {
    /// Construct a sea surface from its four public knobs.
    ///
    /// Fails with [`WaveError::InvalidParameter`] unless `significant_wave_height
    /// > 0`, `direction_count >= 2` and `frequency_count >= 2`.
    pub fn new(
        significant_wave_height: f64,
        predominant_heading: f64,
        seed: i64,
        direction_count: usize,
        frequency_count: usize,
    ) -> Result<Self> {
        if !(significant_wave_height > 0.0) {
            return Err(WaveError::InvalidParameter {
                message: format!(
                    "significant_wave_height must be > 0, got {significant_wave_height}"
                ),
            });
        }
        if direction_count < 2 {
            return Err(WaveError::InvalidParameter {
                message: format!("direction_count must be >= 2, got {direction_count}"),
            });
        }
        if frequency_count < 2 {
            return Err(WaveError::InvalidParameter {
                message: format!("frequency_count must be >= 2, got {frequency_count}"),
            });
        }

        let predominant_heading = normalise_pi(predominant_heading);
        let peak_frequency = PEAK_FREQUENCY_COEFFICIENT / significant_wave_height.sqrt();
        let frequency_min = FREQ_RANGE_LOW_FACTOR * peak_frequency;
        let frequency_max = FREQ_RANGE_HIGH_FACTOR * peak_frequency;

        let spectrum = Self::build_spectrum(
            significant_wave_height,
            predominant_heading,
            seed,
            direction_count,
            frequency_count,
            peak_frequency,
            frequency_min,
            frequency_max,
        )?;

        debug!(
            "sea surface constructed: H_s={significant_wave_height}, theta_p={predominant_heading}, \
             D={direction_count}, F={frequency_count}, f_p={peak_frequency}"
        );

        Ok(Self {
            significant_wave_height,
            predominant_heading,
            seed,
            direction_count,
            frequency_count,
            frequency_min,
            frequency_max,
            spectrum,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn build_spectrum(
        hs: f64,
        theta_p: f64,
        seed: i64,
        direction_count: usize,
        frequency_count: usize,
        peak_frequency: f64,
        frequency_min: f64,
        frequency_max: f64,
    ) -> Result<Vec<RegularWave>> {
        let d_count = direction_count as f64;
        let f_count = frequency_count as f64;

        let delta_theta = PI / d_count;
        let delta_f = (frequency_max - frequency_min) / f_count;

        let mut rng = SeededRng::new(seed);
        let mut spectrum = Vec::with_capacity(direction_count * frequency_count);

        // Row-major (d, f) traversal order — required for reproducibility,
        // spec.md §9.
        for d in 0..direction_count {
            let theta_i = (theta_p - PI / 2.0) + (d as f64 + 0.5) * delta_theta;
            let spread_i = directional_spreading(theta_i, theta_p);

            for f in 0..frequency_count {
                let f_j = frequency_min + (f as f64 + 0.5) * delta_f;
                let s = bretschneider_spectral_density(f_j, hs, peak_frequency) * spread_i;
                let amplitude = (2.0 * s * delta_f * delta_theta).max(0.0).sqrt();
                let phase = rng.next_phase();

                spectrum.push(RegularWave::new(amplitude, f_j, phase, theta_i)?);
            }
        }

        Ok(spectrum)
    }

    pub fn significant_wave_height(&self) -> f64 {
        self.significant_wave_height
    }

    pub fn predominant_heading(&self) -> f64 {
        self.predominant_heading
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn direction_count(&self) -> usize {
        self.direction_count
    }

    pub fn frequency_count(&self) -> usize {
        self.frequency_count
    }

    pub fn frequency_range(&self) -> (f64, f64) {
        (self.frequency_min, self.frequency_max)
    }

    /// Access the regular wave at spectral cell `(d, f)`.
    ///
    /// Fails with [`WaveError::OutOfRange`] if either index is out of bounds.
    pub fn regular_wave_at(&self, d: usize, f: usize) -> Result<&RegularWave> {
        if d >= self.direction_count || f >= self.frequency_count {
            return Err(WaveError::OutOfRange {
                message: format!(
                    "index ({d}, {f}) out of range for a {}x{} spectrum",
                    self.direction_count, self.frequency_count
                ),
            });
        }
        Ok(&self.spectrum[d * self.frequency_count + f])
    }

    /// Surface elevation at `location` and time `t`: the sum of every
    /// spectral component's elevation. `O(D*F)`, accumulated in double
    /// precision for numerical stability over long sums.
    pub fn elevation(&self, location: Coord3D, t: f64) -> f64 {
        let mut total = 0.0_f64;
        for wave in &self.spectrum {
            total += wave.elevation(location, t);
        }
        total
    }
}

/// `cos^2` directional spreading about the predominant heading, normalised
/// so it integrates to 1 over `[theta_p - pi/2, theta_p + pi/2]`. Zero
/// outside that range.
///
/// This resolves the Open Question in spec.md §9 (cos² vs cos²ˢ) in favour
/// of the simpler, parameter-free variant — see DESIGN.md.
pub fn directional_spreading(theta: f64, theta_p: f64) -> f64 {
    let delta = theta - theta_p;
    if delta.abs() > PI / 2.0 + 1e-9 {
        0.0
    } else {
        (2.0 / PI) * delta.cos().powi(2)
    }
}

/// Bretschneider two-parameter spectral density `S(f; H_s, f_p)`.
pub fn bretschneider_spectral_density(f: f64, hs: f64, fp: f64) -> f64 {
    if f <= 0.0 {
        return 0.0;
    }
    let ratio = fp / f;
    (5.0 / 16.0) * hs * hs * fp.powi(4) / f.powi(5) * (-1.25 * ratio.powi(4)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rejects_invalid_construction() {
        assert!(SeaSurface::new(0.0, 0.0, 1, 4, 4).is_err());
        assert!(SeaSurface::new(1.0, 0.0, 1, 1, 4).is_err());
        assert!(SeaSurface::new(1.0, 0.0, 1, 4, 1).is_err());
        assert!(SeaSurface::new(1e-6, 0.0, 1, 2, 2).is_ok());
    }

    #[test]
    fn accessors_respect_bounds() {
        let s = SeaSurface::new(1.0, 0.0, 1, 3, 5).unwrap();
        assert!(s.regular_wave_at(2, 4).is_ok());
        assert!(s.regular_wave_at(3, 0).is_err());
        assert!(s.regular_wave_at(0, 5).is_err());
    }

    #[test]
    fn elevation_at_origin_is_finite() {
        let s = SeaSurface::new(2.0, 0.3, 7, 4, 6).unwrap();
        assert!(s.elevation(Coord3D::zero(), 0.0).is_finite());
    }

    #[test]
    fn deterministic_given_same_seed() {
        let a = SeaSurface::new(1.5, 0.0, 99, 4, 4).unwrap();
        let b = SeaSurface::new(1.5, 0.0, 99, 4, 4).unwrap();
        for d in 0..4 {
            for f in 0..4 {
                assert_eq!(
                    a.regular_wave_at(d, f).unwrap().phase_lag(),
                    b.regular_wave_at(d, f).unwrap().phase_lag()
                );
            }
        }
    }

    #[test]
    fn variance_matches_significant_wave_height() {
        let hs = 2.0;
        let s = SeaSurface::new(hs, 0.0, 123, 16, 32).unwrap();
        let sum_a2_over_2: f64 = (0..s.direction_count())
            .flat_map(|d| (0..s.frequency_count()).map(move |f| (d, f)))
            .map(|(d, f)| {
                let a = s.regular_wave_at(d, f).unwrap().amplitude();
                a * a / 2.0
            })
            .sum();
        let expected = (hs / 4.0).powi(2);
        // Quadrature error from the truncated frequency range and discrete
        // directional bins — generous tolerance.
        assert_relative_eq!(sum_a2_over_2, expected, max_relative = 0.15);
    }

    #[test]
    fn spreading_integrates_to_one() {
        let theta_p = 0.2;
        let n = 100_000;
        let dtheta = PI / n as f64;
        let mut integral = 0.0;
        for i in 0..n {
            let theta = theta_p - PI / 2.0 + (i as f64 + 0.5) * dtheta;
            integral += directional_spreading(theta, theta_p) * dtheta;
        }
        assert_relative_eq!(integral, 1.0, epsilon = 1e-3);
    }
}
