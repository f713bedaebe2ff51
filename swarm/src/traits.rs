//! Consumed contracts: the per-tick controller and output sink

use asvcore_geometry::{Coord3D, RigidBodyDOF};
use asvcore_waves::SeaSurface;

/// A snapshot of one ASV's kinematic state, handed to a [`Controller`] at
/// the start of each tick.
#[derive(Debug, Clone, Copy)]
pub struct AsvObservation {
    pub time: f64,
    pub position: Coord3D,
    pub attitude: Coord3D,
    pub velocity: RigidBodyDOF,
}

/// A single thruster command: which thruster, and its new orientation and
/// magnitude.
#[derive(Debug, Clone, Copy)]
pub struct ThrustCommand {
    pub thruster_index: usize,
    pub orientation: asvcore_asv::ThrustOrientation,
    pub magnitude: f64,
}

/// What a [`Controller`] wants to happen this tick.
#[derive(Debug, Clone)]
pub enum ControlSignal {
    /// Keep running. `rudder_angle` is only meaningful for wave gliders
    /// driven through `wave_glider_compute_dynamics`; ignored otherwise.
    /// Range `(-pi/2, pi/2)`, positive = starboard.
    Continue {
        thrust_commands: Vec<ThrustCommand>,
        rudder_angle: f64,
    },
    /// Stop this vessel — the runner excludes it from all further ticks.
    Stop,
}

/// Consumed contract: given an ASV's current observation and a read-only
/// view of the sea it's on, decide this tick's thruster/rudder commands.
///
/// Implementations are the caller's business (PID loops, waypoint seeking,
/// exhaustive search, a fixed script for tests); this crate only needs the
/// capability "given state, produce rudder and thrust".
pub trait Controller: Send {
    fn on_pre_step(&mut self, observation: &AsvObservation, sea: &SeaSurface) -> ControlSignal;
}

/// One tick's worth of recorded state, handed to a [`Sink`] after the step.
///
/// `position` is the vessel's centre-of-gravity position, not its earth-frame
/// origin — the point a sink correlating multiple vehicles actually cares
/// about.
#[derive(Debug, Clone, Copy)]
pub struct StepRecord {
    pub vehicle_index: usize,
    pub time: f64,
    pub position: Coord3D,
    pub attitude: Coord3D,
    pub velocity: RigidBodyDOF,
    pub force: RigidBodyDOF,
    pub significant_wave_height: f64,
}

/// Consumed contract: receives one [`StepRecord`] per vehicle per tick.
/// Implementations are the caller's business (in-memory logging, a CSV
/// writer, a network stream); this crate only needs "accept a record".
pub trait Sink: Send {
    fn on_post_step(&mut self, record: &StepRecord);
}
