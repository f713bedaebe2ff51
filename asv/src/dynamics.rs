//! Force assembly: wave excitation, propulsion, drag, hydrostatic restoring

use asvcore_geometry::{Coord3D, RigidBodyDOF};
use asvcore_waves::{SeaSurface, WATER_DENSITY};

use crate::{AsvSpec, Result, Thruster};

/// Surge drag coefficient — slender-body, friction-dominated.
const CD_SURGE: f64 = 0.05;
/// Sway drag coefficient — bluff-body, pressure-dominated. ~20x surge, within
/// spec.md §4.4's "10x-30x" guidance.
const CD_SWAY: f64 = 1.0;
/// Heave drag coefficient.
const CD_HEAVE: f64 = 1.0;
/// Angular drag coefficient, shared across roll/pitch/yaw.
const CD_ANGULAR: f64 = 0.02;

/// Minimum heave velocity magnitude below which wave-glider thrust is
/// suppressed, to avoid noise-driven jitter (spec.md §4.4).
pub const WAVE_GLIDER_MIN_HEAVE_VELOCITY: f64 = 0.01;

/// Mass matrix (diagonal, stored as a 6-vector): translational mass on
/// surge/sway/heave, mass-moment of inertia (`m * r^2`) on roll/pitch/yaw.
pub fn mass_matrix(spec: &AsvSpec) -> RigidBodyDOF {
    let m = spec.displacement;
    RigidBodyDOF::new(
        m,
        m,
        m,
        m * spec.radius_of_gyration_roll.powi(2),
        m * spec.radius_of_gyration_pitch.powi(2),
        m * spec.radius_of_gyration_yaw.powi(2),
    )
}

/// Hydrostatic restoring stiffness (diagonal): heave from waterplane area,
/// roll/pitch from the waterplane's second moment of area — equivalently
/// `rho * g * I_waterplane`, which for a rectangular waterplane of
/// `L` x `B` reduces to the `B^2/(12*T)` / `L^2/(12*T)` metacentric-radius
/// form spec.md §4.4 calls out, once the displaced volume `V = L*B*T` is
/// substituted in. Zero on surge/sway/yaw, per spec.md §4.4 step 4.
pub fn stiffness_matrix(spec: &AsvSpec) -> RigidBodyDOF {
    let (l, b) = (spec.waterline_length, spec.beam);
    let k_heave = WATER_DENSITY * asvcore_waves::GRAVITY * spec.waterplane_area();
    let k_roll = WATER_DENSITY * asvcore_waves::GRAVITY * (l * b.powi(3)) / 12.0;
    let k_pitch = WATER_DENSITY * asvcore_waves::GRAVITY * (b * l.powi(3)) / 12.0;
    RigidBodyDOF::new(0.0, 0.0, k_heave, k_roll, k_pitch, 0.0)
}

/// Precompute the unit-wave pressure amplitude at `draft` for every spectral
/// cell of `sea`, in the sea surface's `(d, f)` row-major order — the cache
/// spec.md §4.4's init step describes.
pub fn cache_pressure_amplitudes(sea: &SeaSurface, draft: f64) -> Result<Vec<f64>> {
    let mut amplitudes = Vec::with_capacity(sea.direction_count() * sea.frequency_count());
    for d in 0..sea.direction_count() {
        for f in 0..sea.frequency_count() {
            let wave = sea.regular_wave_at(d, f)?;
            amplitudes.push(wave.pressure_amplitude(draft)?);
        }
    }
    Ok(amplitudes)
}

/// Wave excitation force, spec.md §4.4 step 1: for each spectral component,
/// combine its cached unit-wave pressure amplitude with its local phase at
/// the vessel's current horizontal position, and spread the resulting
/// pressure across the hull's waterplane as a slender-body Froude-Krylov
/// approximation — proportional to the waterplane area for heave, to the
/// half-beam/half-length lever for roll/pitch, and to the wetted frontal
/// area for surge/sway.
pub fn wave_force(
    spec: &AsvSpec,
    sea: &SeaSurface,
    pressure_amplitudes: &[f64],
    cog: Coord3D,
    time: f64,
) -> Result<RigidBodyDOF> {
    let mut total = RigidBodyDOF::zero();
    let waterplane_area = spec.waterplane_area();
    let location = Coord3D::new(cog.x, cog.y, 0.0);

    for d in 0..sea.direction_count() {
        for f in 0..sea.frequency_count() {
            let wave = sea.regular_wave_at(d, f)?;
            let p0 = pressure_amplitudes[d * sea.frequency_count() + f];
            let phase = wave.phase(location, time);
            let p = p0 * phase.cos();
            let theta = wave.direction();

            total = total
                + RigidBodyDOF::new(
                    p * spec.draft * spec.beam * 0.5 * theta.cos(),
                    p * spec.draft * spec.beam * 0.5 * theta.sin(),
                    p * waterplane_area,
                    p * waterplane_area * (spec.beam / 4.0) * theta.sin(),
                    p * waterplane_area * (spec.waterline_length / 4.0) * theta.cos(),
                    0.0,
                );
        }
    }
    Ok(total)
}

/// Generalised propeller/thruster force, spec.md §4.4 step 2: each
/// thruster's body-frame force vector contributes directly to
/// surge/sway/heave, and `offset x force` to roll/pitch/yaw.
pub fn propeller_force(thrusters: &[Thruster]) -> RigidBodyDOF {
    let mut total = RigidBodyDOF::zero();
    for thruster in thrusters {
        let force = thruster.force_vector();
        let moment = thruster.position.cross(&force);
        total = total
            + RigidBodyDOF::new(
                force.x, force.y, force.z, moment.x, moment.y, moment.z,
            );
    }
    total
}

/// Quadratic drag, diagonal and velocity-sign-opposing, spec.md §4.4 step 3.
pub fn drag_force(spec: &AsvSpec, velocity: RigidBodyDOF) -> RigidBodyDOF {
    let quad = |coeff: f64, area: f64, v: f64| 0.5 * WATER_DENSITY * coeff * area * v * v.abs();

    let area_surge = spec.beam * spec.draft;
    let area_sway = spec.waterline_length * spec.draft;
    let area_heave = spec.waterplane_area();

    RigidBodyDOF::new(
        quad(CD_SURGE, area_surge, velocity.surge),
        quad(CD_SWAY, area_sway, velocity.sway),
        quad(CD_HEAVE, area_heave, velocity.heave),
        quad(CD_ANGULAR, spec.radius_of_gyration_roll.powi(5), velocity.roll),
        quad(CD_ANGULAR, spec.radius_of_gyration_pitch.powi(5), velocity.pitch),
        quad(CD_ANGULAR, spec.radius_of_gyration_yaw.powi(5), velocity.yaw),
    )
}

/// Linear hydrostatic restoring force, spec.md §4.4 step 4: a spring on
/// heave/roll/pitch proportional to the current displacement from the
/// initial (equilibrium) pose.
pub fn restoring_force(stiffness: RigidBodyDOF, displacement: RigidBodyDOF) -> RigidBodyDOF {
    stiffness.elementwise_mul(&displacement)
}

/// Wave-glider passive thrust, spec.md §4.4 "Wave-glider thrust": a
/// submerged wing converts vertical wave velocity into horizontal thrust,
/// magnitude `C_thrust * rho * A_wing * w_g^2`, directed in the horizontal
/// plane at `vehicle_heading + rudder_angle`. Zero below the minimum-motion
/// threshold. Injected by the caller into `F_propeller` for the force
/// assembly step.
pub fn wave_glider_thrust(
    tuning_factor: f64,
    wing_area: f64,
    heave_velocity: f64,
    vehicle_heading: f64,
    rudder_angle: f64,
) -> RigidBodyDOF {
    if heave_velocity.abs() < WAVE_GLIDER_MIN_HEAVE_VELOCITY {
        return RigidBodyDOF::zero();
    }
    let magnitude = tuning_factor * WATER_DENSITY * wing_area * heave_velocity * heave_velocity;
    let direction = vehicle_heading + rudder_angle;
    RigidBodyDOF::new(
        magnitude * direction.cos(),
        magnitude * direction.sin(),
        0.0,
        0.0,
        0.0,
        0.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_spec() -> AsvSpec {
        AsvSpec::new(2.1, 0.6, 0.8, 0.3, 2.5, 300.0, 0.3, 0.6, 0.6, Coord3D::zero(), 0.2).unwrap()
    }

    #[test]
    fn mass_matrix_has_no_zero_terms() {
        let m = mass_matrix(&sample_spec());
        for v in m.as_array() {
            assert!(v > 0.0);
        }
    }

    #[test]
    fn stiffness_zero_on_surge_sway_yaw() {
        let k = stiffness_matrix(&sample_spec());
        assert_relative_eq!(k.surge, 0.0);
        assert_relative_eq!(k.sway, 0.0);
        assert_relative_eq!(k.yaw, 0.0);
        assert!(k.heave > 0.0);
        assert!(k.roll > 0.0);
        assert!(k.pitch > 0.0);
    }

    #[test]
    fn drag_opposes_velocity_sign() {
        let spec = sample_spec();
        let forward = drag_force(&spec, RigidBodyDOF::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0));
        let backward = drag_force(&spec, RigidBodyDOF::new(-1.0, 0.0, 0.0, 0.0, 0.0, 0.0));
        assert!(forward.surge > 0.0);
        assert!(backward.surge < 0.0);
        assert_relative_eq!(forward.surge, -backward.surge, epsilon = 1e-9);
    }

    #[test]
    fn restoring_opposes_displacement() {
        let k = RigidBodyDOF::new(0.0, 0.0, 100.0, 50.0, 50.0, 0.0);
        let disp = RigidBodyDOF::new(0.0, 0.0, 1.0, 0.1, 0.0, 0.0);
        let f = restoring_force(k, disp);
        assert_relative_eq!(f.heave, 100.0);
        assert_relative_eq!(f.roll, 5.0);
    }

    #[test]
    fn wave_glider_thrust_zero_below_threshold() {
        let f = wave_glider_thrust(1.0, 0.2, 0.001, 0.0, 0.0);
        assert_relative_eq!(f.surge, 0.0);
        assert_relative_eq!(f.sway, 0.0);
    }

    #[test]
    fn wave_glider_thrust_points_along_heading_plus_rudder() {
        let f = wave_glider_thrust(1.0, 0.2, 0.5, 0.0, std::f64::consts::FRAC_PI_2);
        assert!(f.surge.abs() < 1e-6);
        assert!(f.sway > 0.0);
    }

    #[test]
    fn wave_glider_thrust_grows_with_velocity_squared() {
        let small = wave_glider_thrust(1.0, 0.2, 0.1, 0.0, 0.0);
        let large = wave_glider_thrust(1.0, 0.2, 0.2, 0.0, 0.0);
        assert_relative_eq!(large.surge / small.surge, 4.0, epsilon = 1e-6);
    }
}
