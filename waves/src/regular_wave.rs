//! Single phase-randomised regular wave component

use crate::{WaveError, Result, GRAVITY, WATER_DENSITY};
use asvcore_geometry::{normalise_pi, Coord3D};
use serde::{Deserialize, Serialize};

/// A single sinusoidal wave component: amplitude, frequency, phase and
/// direction, plus quantities derived from them at construction time.
///
/// Immutable after construction — every derived field (`angular_frequency`,
/// `period`, `wave_number`, `wave_length`) is computed once and cached rather
/// than recomputed per call, matching spec.md §3's invariant that they stay
/// "strictly consistent with f".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegularWave {
    amplitude: f64,
    frequency: f64,
    phase_lag: f64,
    direction: f64,
    angular_frequency: f64,
    period: f64,
    wave_number: f64,
    wave_length: f64,
}

impl RegularWave {
    /// Construct a regular wave component.
    ///
    /// Fails with [`WaveError::InvalidParameter`] when `amplitude < 0` or
    /// `frequency <= 0`. `direction` is normalised to `(-pi, pi]`.
    pub fn new(amplitude: f64, frequency: f64, phase_lag: f64, direction: f64) -> Result<Self> {
        if amplitude < 0.0 {
            return Err(WaveError::InvalidParameter {
                message: format!("amplitude must be >= 0, got {amplitude}"),
            });
        }
        if !(frequency > 0.0) {
            return Err(WaveError::InvalidParameter {
                message: format!("frequency must be > 0, got {frequency}"),
            });
        }

        let angular_frequency = 2.0 * std::f64::consts::PI * frequency;
        let period = 1.0 / frequency;
        // Deep-water dispersion relation: k = omega^2 / g.
        let wave_number = angular_frequency * angular_frequency / GRAVITY;
        let wave_length = 2.0 * std::f64::consts::PI / wave_number;

        Ok(Self {
            amplitude,
            frequency,
            phase_lag,
            direction: normalise_pi(direction),
            angular_frequency,
            period,
            wave_number,
            wave_length,
        })
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn phase_lag(&self) -> f64 {
        self.phase_lag
    }

    pub fn direction(&self) -> f64 {
        self.direction
    }

    pub fn angular_frequency(&self) -> f64 {
        self.angular_frequency
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn wave_number(&self) -> f64 {
        self.wave_number
    }

    pub fn wave_length(&self) -> f64 {
        self.wave_length
    }

    /// Phase `phi = omega*t - k*(x*cos(theta) + y*sin(theta)) + phase_lag`.
    ///
    /// Computed in that exact order, in double precision, with no wrap-around
    /// applied — callers take `cos`/`sin` of the result. `z` of `location` is
    /// ignored (deep water, surface-only evaluation).
    pub fn phase(&self, location: Coord3D, t: f64) -> f64 {
        self.angular_frequency * t
            - self.wave_number * (location.x * self.direction.cos() + location.y * self.direction.sin())
            + self.phase_lag
    }

    /// Surface elevation `a * cos(phase)` at `location` and time `t`.
    pub fn elevation(&self, location: Coord3D, t: f64) -> f64 {
        self.amplitude * self.phase(location, t).cos()
    }

    /// Pressure amplitude `rho * g * a * exp(-k * depth)` at a given depth
    /// below the surface (`depth` measured downward, positive).
    ///
    /// Fails with [`WaveError::InvalidParameter`] on negative depth.
    pub fn pressure_amplitude(&self, depth: f64) -> Result<f64> {
        if depth < 0.0 {
            return Err(WaveError::InvalidParameter {
                message: format!("depth must be >= 0, got {depth}"),
            });
        }
        Ok(WATER_DENSITY * GRAVITY * self.amplitude * (-self.wave_number * depth).exp())
    }
}
