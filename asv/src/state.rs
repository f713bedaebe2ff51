//! Per-tick kinematic and dynamic state

use crate::Thruster;
use asvcore_geometry::{Coord3D, RigidBodyDOF};

/// Mutable simulation state for one ASV.
///
/// `displacement`, `velocity`, `acceleration` and the force breakdown are
/// tracked in generalised 6-DOF coordinates; `origin`/`attitude` (the
/// earth-frame pose reported to callers) are derived each tick from the
/// vessel's initial pose plus the accumulated displacement, under the
/// small-angle linearisation spec.md §3 assumes throughout.
#[derive(Debug, Clone)]
pub struct AsvState {
    pub(crate) initial_origin: Coord3D,
    pub(crate) initial_attitude: Coord3D,
    pub(crate) displacement: RigidBodyDOF,
    pub(crate) velocity: RigidBodyDOF,
    pub(crate) acceleration: RigidBodyDOF,
    pub(crate) force: RigidBodyDOF,
    pub(crate) force_wave: RigidBodyDOF,
    pub(crate) force_propeller: RigidBodyDOF,
    pub(crate) force_drag: RigidBodyDOF,
    pub(crate) force_restoring: RigidBodyDOF,
    pub(crate) time: f64,
    pub(crate) time_step: f64,
    /// Cached unit-wave pressure amplitude at draft, one per spectral cell,
    /// indexed the same way as the sea surface's `(d, f)` grid. Recomputed
    /// whenever the sea state is swapped.
    pub(crate) pressure_amplitudes: Vec<f64>,
    pub(crate) thrusters: Vec<Thruster>,
    pub(crate) wave_glider_tuning_factor: f64,
}

impl AsvState {
    pub(crate) fn new(initial_origin: Coord3D, initial_attitude: Coord3D, time_step: f64) -> Self {
        Self {
            initial_origin,
            initial_attitude,
            displacement: RigidBodyDOF::zero(),
            velocity: RigidBodyDOF::zero(),
            acceleration: RigidBodyDOF::zero(),
            force: RigidBodyDOF::zero(),
            force_wave: RigidBodyDOF::zero(),
            force_propeller: RigidBodyDOF::zero(),
            force_drag: RigidBodyDOF::zero(),
            force_restoring: RigidBodyDOF::zero(),
            time: 0.0,
            time_step,
            pressure_amplitudes: Vec::new(),
            thrusters: Vec::new(),
            wave_glider_tuning_factor: 1.0,
        }
    }

    /// Earth-frame origin position.
    pub fn origin(&self) -> Coord3D {
        self.initial_origin
            + Coord3D::new(
                self.displacement.surge,
                self.displacement.sway,
                self.displacement.heave,
            )
    }

    /// Euler attitude `(roll, pitch, yaw)`, stored as a [`Coord3D`] per
    /// spec.md §6's ASV initialisation signature.
    pub fn attitude(&self) -> Coord3D {
        self.initial_attitude
            + Coord3D::new(
                self.displacement.roll,
                self.displacement.pitch,
                self.displacement.yaw,
            )
    }

    /// Centre-of-gravity earth-frame position: `origin + R(attitude) * cog`,
    /// with `R(attitude) * v` linearised to `v + attitude_vector x v` under
    /// the small-angle assumption.
    pub fn cog_position(&self, cog_offset: Coord3D) -> Coord3D {
        let attitude = self.attitude();
        let rotated = cog_offset + attitude.cross(&cog_offset);
        self.origin() + rotated
    }

    pub fn velocity(&self) -> RigidBodyDOF {
        self.velocity
    }

    pub fn acceleration(&self) -> RigidBodyDOF {
        self.acceleration
    }

    pub fn force(&self) -> RigidBodyDOF {
        self.force
    }

    pub fn simulation_time(&self) -> f64 {
        self.time
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn thrusters(&self) -> &[Thruster] {
        &self.thrusters
    }

    pub fn wave_glider_tuning_factor(&self) -> f64 {
        self.wave_glider_tuning_factor
    }
}
