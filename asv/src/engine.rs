//! The ASV state machine: owns a vessel spec, its current sea state, and the
//! per-tick dynamics assembly.

use std::sync::Arc;

use asvcore_geometry::{Coord3D, RigidBodyDOF};
use asvcore_numerics::integration::semi_implicit_euler_step;
use asvcore_waves::SeaSurface;

use crate::dynamics::{
    cache_pressure_amplitudes, drag_force, mass_matrix, propeller_force, restoring_force,
    stiffness_matrix, wave_force, wave_glider_thrust,
};
use crate::{AsvError, AsvState, Result, ThrustOrientation, Thruster};

/// Internal lifecycle marker. Construction is initialisation in this design
/// — there is no observable uninitialised `AsvEngine` — but the enum is kept
/// as a seam for a future multi-stage setup, matching the way the teacher's
/// `BEMConfig`-holding solver types carry a readiness flag even when their
/// current constructor is one-shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AsvLifecycle {
    Initialised,
}

/// Drives one ASV's 6-DOF dynamics against a shared sea surface.
pub struct AsvEngine {
    spec: crate::AsvSpec,
    sea: Arc<SeaSurface>,
    state: AsvState,
    mass: RigidBodyDOF,
    stiffness: RigidBodyDOF,
    lifecycle: AsvLifecycle,
}

impl AsvEngine {
    /// Construct a new engine at `initial_origin`/`initial_attitude` on
    /// `sea`, stepping at `time_step_ms` milliseconds.
    ///
    /// Fails with [`AsvError::InvalidParameter`] if `time_step_ms` is not
    /// strictly positive.
    pub fn new(
        spec: crate::AsvSpec,
        sea: Arc<SeaSurface>,
        initial_origin: Coord3D,
        initial_attitude: Coord3D,
        time_step_ms: f64,
    ) -> Result<Self> {
        if !(time_step_ms > 0.0) {
            return Err(AsvError::InvalidParameter {
                message: format!("time_step_ms must be > 0, got {time_step_ms}"),
            });
        }
        let time_step = time_step_ms / 1000.0;
        let mut state = AsvState::new(initial_origin, initial_attitude, time_step);
        state.pressure_amplitudes = cache_pressure_amplitudes(&sea, spec.draft)?;

        log::debug!(
            "asv engine initialised: waterline_length={}, beam={}, dt={}s",
            spec.waterline_length,
            spec.beam,
            time_step
        );

        Ok(Self {
            mass: mass_matrix(&spec),
            stiffness: stiffness_matrix(&spec),
            spec,
            sea,
            state,
            lifecycle: AsvLifecycle::Initialised,
        })
    }

    /// Replace the thruster array. Every thruster must lie inside the hull
    /// envelope `|x| <= L/2`, `|y| <= B/2`, `-D <= z <= 0`.
    pub fn set_thrusters(&mut self, thrusters: Vec<Thruster>) -> Result<()> {
        let (half_l, half_b, depth) = (
            self.spec.waterline_length / 2.0,
            self.spec.beam / 2.0,
            self.spec.depth,
        );
        for t in &thrusters {
            let p = t.position;
            if p.x.abs() > half_l || p.y.abs() > half_b || p.z < -depth || p.z > 0.0 {
                return Err(AsvError::InvalidParameter {
                    message: format!(
                        "thruster position {:?} outside hull envelope (|x|<={half_l}, |y|<={half_b}, -{depth}<=z<=0)",
                        p
                    ),
                });
            }
        }
        self.state.thrusters = thrusters;
        Ok(())
    }

    /// Current thruster array.
    pub fn get_thrusters(&self) -> &[Thruster] {
        &self.state.thrusters
    }

    /// Set a single thruster's commanded direction and magnitude.
    ///
    /// Fails with [`AsvError::OutOfRange`] if `index` is out of bounds, or
    /// propagates [`AsvError::InvalidParameter`] from a negative magnitude.
    pub fn set_thrust(
        &mut self,
        index: usize,
        orientation: ThrustOrientation,
        magnitude: f64,
    ) -> Result<()> {
        let thruster =
            self.state
                .thrusters
                .get_mut(index)
                .ok_or_else(|| AsvError::OutOfRange {
                    message: format!(
                        "thruster index {index} out of range (have {})",
                        self.state.thrusters.len()
                    ),
                })?;
        thruster.set_thrust(orientation, magnitude)?;
        Ok(())
    }

    /// Swap in a new sea state, recomputing the cached unit-wave pressure
    /// amplitudes against it.
    pub fn set_sea_state(&mut self, sea: Arc<SeaSurface>) -> Result<()> {
        self.state.pressure_amplitudes = cache_pressure_amplitudes(&sea, self.spec.draft)?;
        self.sea = sea;
        Ok(())
    }

    /// Set the wave-glider tuning factor, clamped to `(0.0, 10.0]`.
    ///
    /// Fails with [`AsvError::InvalidParameter`] if `factor` is not
    /// strictly positive.
    pub fn set_wave_glider_tuning_factor(&mut self, factor: f64) -> Result<()> {
        if !(factor > 0.0) {
            return Err(AsvError::InvalidParameter {
                message: format!("wave-glider tuning factor must be > 0, got {factor}"),
            });
        }
        self.state.wave_glider_tuning_factor = factor.min(10.0);
        Ok(())
    }

    /// Advance the vessel by `dt` seconds under wave excitation, propulsion,
    /// drag and hydrostatic restoring.
    pub fn compute_dynamics(&mut self, dt: f64) -> Result<()> {
        self.step(dt, None)
    }

    /// Advance the vessel by `dt` seconds, first deriving the wave-glider's
    /// passive wing thrust from the current heave velocity and `rudder_angle`,
    /// and injecting it into `F_propeller` before the rest of the assembly.
    pub fn wave_glider_compute_dynamics(&mut self, rudder_angle: f64, dt: f64) -> Result<()> {
        self.step(dt, Some(rudder_angle))
    }

    fn step(&mut self, dt: f64, wave_glider_rudder_angle: Option<f64>) -> Result<()> {
        debug_assert_eq!(self.lifecycle, AsvLifecycle::Initialised);
        if !(dt > 0.0) {
            return Err(AsvError::InvalidParameter {
                message: format!("dt must be > 0, got {dt}"),
            });
        }

        let cog = self.state.cog_position(self.spec.cog);
        let force_wave = wave_force(
            &self.spec,
            &self.sea,
            &self.state.pressure_amplitudes,
            cog,
            self.state.time,
        )?;

        let mut force_propeller = propeller_force(&self.state.thrusters);
        if let Some(rudder_angle) = wave_glider_rudder_angle {
            let heading = self.state.attitude().z;
            force_propeller = force_propeller
                + wave_glider_thrust(
                    self.state.wave_glider_tuning_factor,
                    self.spec.wing_area,
                    self.state.velocity.heave,
                    heading,
                    rudder_angle,
                );
        }

        let force_drag = drag_force(&self.spec, self.state.velocity);
        let force_restoring = restoring_force(self.stiffness, self.state.displacement);
        let force_total = force_wave + force_propeller - force_drag - force_restoring;

        let acceleration_dof = force_total.elementwise_div(&self.mass);
        let acceleration = acceleration_dof.as_array();
        let velocity = self.state.velocity.as_array();
        let displacement = self.state.displacement.as_array();

        let mut new_velocity = [0.0; asvcore_geometry::ELEMENTS];
        let mut new_displacement = [0.0; asvcore_geometry::ELEMENTS];
        for i in 0..asvcore_geometry::ELEMENTS {
            let (x, v) =
                semi_implicit_euler_step(displacement[i], velocity[i], acceleration[i], dt)?;
            new_displacement[i] = x;
            new_velocity[i] = v;
        }

        self.state.acceleration = acceleration_dof;
        self.state.velocity = RigidBodyDOF::from_array(new_velocity);
        self.state.displacement = RigidBodyDOF::from_array(new_displacement);
        self.state.force = force_total;
        self.state.force_wave = force_wave;
        self.state.force_propeller = force_propeller;
        self.state.force_drag = force_drag;
        self.state.force_restoring = force_restoring;
        self.state.time += dt;

        Ok(())
    }

    pub fn spec(&self) -> &crate::AsvSpec {
        &self.spec
    }

    pub fn sea_surface(&self) -> &SeaSurface {
        &self.sea
    }

    pub fn origin(&self) -> Coord3D {
        self.state.origin()
    }

    pub fn attitude(&self) -> Coord3D {
        self.state.attitude()
    }

    pub fn cog_position(&self) -> Coord3D {
        self.state.cog_position(self.spec.cog)
    }

    pub fn velocity(&self) -> RigidBodyDOF {
        self.state.velocity()
    }

    pub fn acceleration(&self) -> RigidBodyDOF {
        self.state.acceleration()
    }

    pub fn force(&self) -> RigidBodyDOF {
        self.state.force()
    }

    pub fn force_wave(&self) -> RigidBodyDOF {
        self.state.force_wave
    }

    pub fn simulation_time(&self) -> f64 {
        self.state.simulation_time()
    }

    pub fn time_step(&self) -> f64 {
        self.state.time_step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_spec(wing_area: f64) -> crate::AsvSpec {
        crate::AsvSpec::new(
            2.1, 0.6, 0.8, 0.3, 2.5, 300.0, 0.3, 0.6, 0.6, Coord3D::zero(), wing_area,
        )
        .unwrap()
    }

    fn calm_sea() -> Arc<SeaSurface> {
        Arc::new(SeaSurface::new(0.01, 0.0, 1, 2, 2).unwrap())
    }

    #[test]
    fn rejects_non_positive_time_step() {
        let engine = AsvEngine::new(sample_spec(0.2), calm_sea(), Coord3D::zero(), Coord3D::zero(), 0.0);
        assert!(engine.is_err());
    }

    #[test]
    fn rejects_thruster_outside_hull() {
        let mut engine = AsvEngine::new(
            sample_spec(0.2),
            calm_sea(),
            Coord3D::zero(),
            Coord3D::zero(),
            40.0,
        )
        .unwrap();
        let bad = vec![Thruster::new(Coord3D::new(10.0, 0.0, 0.0))];
        assert!(engine.set_thrusters(bad).is_err());
    }

    #[test]
    fn accepts_thruster_inside_hull() {
        let mut engine = AsvEngine::new(
            sample_spec(0.2),
            calm_sea(),
            Coord3D::zero(),
            Coord3D::zero(),
            40.0,
        )
        .unwrap();
        let ok = vec![Thruster::new(Coord3D::new(1.0, 0.2, -0.1))];
        assert!(engine.set_thrusters(ok).is_ok());
    }

    #[test]
    fn zero_thrust_zero_wave_zero_velocity_does_not_drift() {
        let mut engine = AsvEngine::new(
            sample_spec(0.2),
            calm_sea(),
            Coord3D::new(5.0, 5.0, 0.0),
            Coord3D::zero(),
            40.0,
        )
        .unwrap();
        let origin0 = engine.origin();
        let attitude0 = engine.attitude();
        for _ in 0..100 {
            engine.compute_dynamics(0.04).unwrap();
        }
        assert_relative_eq!(engine.origin().x, origin0.x, epsilon = 1e-9);
        assert_relative_eq!(engine.origin().y, origin0.y, epsilon = 1e-9);
        assert_relative_eq!(engine.origin().z, origin0.z, epsilon = 1e-9);
        assert_relative_eq!(engine.attitude().x, attitude0.x, epsilon = 1e-9);
        assert_relative_eq!(engine.attitude().z, attitude0.z, epsilon = 1e-9);
    }

    #[test]
    fn tuning_factor_rejects_non_positive() {
        let mut engine = AsvEngine::new(
            sample_spec(0.2),
            calm_sea(),
            Coord3D::zero(),
            Coord3D::zero(),
            40.0,
        )
        .unwrap();
        assert!(engine.set_wave_glider_tuning_factor(0.0).is_err());
        assert!(engine.set_wave_glider_tuning_factor(-1.0).is_err());
    }

    #[test]
    fn tuning_factor_clamped_to_ten() {
        let mut engine = AsvEngine::new(
            sample_spec(0.2),
            calm_sea(),
            Coord3D::zero(),
            Coord3D::zero(),
            40.0,
        )
        .unwrap();
        engine.set_wave_glider_tuning_factor(50.0).unwrap();
        assert_relative_eq!(engine.state.wave_glider_tuning_factor, 10.0);
    }

    #[test]
    fn thruster_along_surge_increases_forward_position() {
        let mut engine = AsvEngine::new(
            sample_spec(0.2),
            calm_sea(),
            Coord3D::zero(),
            Coord3D::zero(),
            40.0,
        )
        .unwrap();
        engine
            .set_thrusters(vec![Thruster::new(Coord3D::zero())])
            .unwrap();
        engine
            .set_thrust(0, ThrustOrientation::new(0.0, 0.0), 50.0)
            .unwrap();
        for _ in 0..50 {
            engine.compute_dynamics(0.04).unwrap();
        }
        assert!(engine.origin().x > 0.0);
    }

    #[test]
    fn rejects_thrust_on_out_of_range_index() {
        let mut engine = AsvEngine::new(
            sample_spec(0.2),
            calm_sea(),
            Coord3D::zero(),
            Coord3D::zero(),
            40.0,
        )
        .unwrap();
        assert!(matches!(
            engine.set_thrust(0, ThrustOrientation::default(), 1.0),
            Err(AsvError::OutOfRange { .. })
        ));
    }

    #[test]
    fn set_thrusters_then_get_thrusters_round_trips() {
        let mut engine = AsvEngine::new(
            sample_spec(0.2),
            calm_sea(),
            Coord3D::zero(),
            Coord3D::zero(),
            40.0,
        )
        .unwrap();
        let list = vec![
            Thruster::new(Coord3D::new(1.0, 0.0, -0.1)),
            Thruster::new(Coord3D::new(-1.0, 0.0, -0.1)),
        ];
        engine.set_thrusters(list.clone()).unwrap();
        assert_eq!(engine.get_thrusters().len(), list.len());
    }
}
