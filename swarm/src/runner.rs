//! Parallel multi-vehicle tick scheduling

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use asvcore_asv::AsvEngine;
use rayon::prelude::*;

use crate::traits::{AsvObservation, ControlSignal, Controller, Sink, StepRecord};
use crate::{Result, SwarmError};

/// Start/end/step-size description of a run, mirroring the constructor
/// signature spec.md §6 gives the `SwarmRunner`.
#[derive(Debug, Clone, Copy)]
pub struct ClockSchedule {
    pub start: f64,
    pub end: f64,
    pub dt: f64,
}

impl ClockSchedule {
    /// Fails with [`SwarmError::InvalidParameter`] unless `dt > 0` and
    /// `end > start`.
    pub fn new(start: f64, end: f64, dt: f64) -> Result<Self> {
        if !(dt > 0.0) {
            return Err(SwarmError::InvalidParameter {
                message: format!("dt must be > 0, got {dt}"),
            });
        }
        if !(end > start) {
            return Err(SwarmError::InvalidParameter {
                message: format!("end ({end}) must be > start ({start})"),
            });
        }
        Ok(Self { start, end, dt })
    }

    pub fn step_count(&self) -> usize {
        ((self.end - self.start) / self.dt).ceil() as usize
    }
}

/// Whether vehicles step in lockstep or independently.
///
/// `Barrier` runs every vehicle's (controller -> step -> sink) for tick `n`
/// before any vehicle starts tick `n + 1` — required when a `Sink`
/// correlates vehicles within the same tick. `Striding` lets each vehicle's
/// whole schedule run as one independent rayon job with no cross-vehicle
/// synchronisation, which pipelines better when vehicles don't interact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    Barrier,
    Striding,
}

struct Vehicle {
    controller: Box<dyn Controller>,
    engine: AsvEngine,
    sink: Box<dyn Sink>,
    wave_glider: bool,
    stopped: bool,
}

/// Drives a swarm of ASVs against a shared sea surface, stepping them in
/// parallel via a `rayon` thread pool sized to the machine's available
/// parallelism.
pub struct SwarmRunner {
    vehicles: Vec<Vehicle>,
    schedule: ClockSchedule,
    sync_mode: SyncMode,
    pool: rayon::ThreadPool,
    cancelled: Arc<AtomicBool>,
}

impl SwarmRunner {
    pub fn new(schedule: ClockSchedule, sync_mode: SyncMode) -> Self {
        let num_threads = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .unwrap_or_else(|err| {
                log::warn!("failed to size swarm thread pool to {num_threads} threads: {err}; falling back to rayon default");
                rayon::ThreadPoolBuilder::new().build().expect("default rayon pool always builds")
            });
        log::debug!("swarm runner built with {num_threads} threads, sync_mode={sync_mode:?}");

        Self {
            vehicles: Vec::new(),
            schedule,
            sync_mode,
            pool,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Register one vehicle. `wave_glider` selects `wave_glider_compute_dynamics`
    /// over `compute_dynamics` for this vehicle's steps.
    pub fn add_vehicle(
        &mut self,
        controller: Box<dyn Controller>,
        engine: AsvEngine,
        sink: Box<dyn Sink>,
        wave_glider: bool,
    ) -> usize {
        self.vehicles.push(Vehicle {
            controller,
            engine,
            sink,
            wave_glider,
            stopped: false,
        });
        self.vehicles.len() - 1
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    /// A cancellation handle: flip it to stop the run before its next tick
    /// boundary (`Barrier` mode) or before a vehicle's next step
    /// (`Striding` mode).
    pub fn cancellation_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    /// Run the schedule to completion or cancellation.
    pub fn run(&mut self) {
        match self.sync_mode {
            SyncMode::Barrier => self.run_barrier(),
            SyncMode::Striding => self.run_striding(),
        }
    }

    fn run_barrier(&mut self) {
        let steps = self.schedule.step_count();
        let dt = self.schedule.dt;
        let cancelled = Arc::clone(&self.cancelled);
        let vehicles = &mut self.vehicles;

        self.pool.install(|| {
            for tick in 0..steps {
                if cancelled.load(Ordering::Relaxed) {
                    log::debug!("swarm run cancelled at tick {tick}");
                    break;
                }
                if vehicles.iter().all(|v| v.stopped) {
                    break;
                }
                vehicles
                    .par_iter_mut()
                    .enumerate()
                    .for_each(|(index, vehicle)| {
                        if vehicle.stopped {
                            return;
                        }
                        if !step_one(vehicle, index, dt) {
                            vehicle.stopped = true;
                        }
                    });
            }
        });
    }

    fn run_striding(&mut self) {
        let dt = self.schedule.dt;
        let end = self.schedule.end;
        let cancelled = Arc::clone(&self.cancelled);

        self.pool.install(|| {
            self.vehicles
                .par_iter_mut()
                .enumerate()
                .for_each(|(index, vehicle)| {
                    while vehicle.engine.simulation_time() < end {
                        if cancelled.load(Ordering::Relaxed) {
                            break;
                        }
                        if !step_one(vehicle, index, dt) {
                            break;
                        }
                    }
                });
        });
    }
}

/// Run one vehicle's pre-step controller call, dynamics step, and post-step
/// sink call. Returns `false` if the controller issued a stop signal.
fn step_one(vehicle: &mut Vehicle, index: usize, dt: f64) -> bool {
    let observation = AsvObservation {
        time: vehicle.engine.simulation_time(),
        position: vehicle.engine.origin(),
        attitude: vehicle.engine.attitude(),
        velocity: vehicle.engine.velocity(),
    };

    let signal = vehicle
        .controller
        .on_pre_step(&observation, vehicle.engine.sea_surface());

    let rudder_angle = match signal {
        ControlSignal::Stop => return false,
        ControlSignal::Continue {
            thrust_commands,
            rudder_angle,
        } => {
            for cmd in thrust_commands {
                if let Err(err) =
                    vehicle
                        .engine
                        .set_thrust(cmd.thruster_index, cmd.orientation, cmd.magnitude)
                {
                    log::warn!("rejected thrust command: {err}");
                }
            }
            rudder_angle
        }
    };

    let step_result = if vehicle.wave_glider {
        vehicle.engine.wave_glider_compute_dynamics(rudder_angle, dt)
    } else {
        vehicle.engine.compute_dynamics(dt)
    };
    if let Err(err) = step_result {
        log::warn!("dynamics step failed: {err}");
        return false;
    }

    let record = StepRecord {
        vehicle_index: index,
        time: vehicle.engine.simulation_time(),
        position: vehicle.engine.cog_position(),
        attitude: vehicle.engine.attitude(),
        velocity: vehicle.engine.velocity(),
        force: vehicle.engine.force(),
        significant_wave_height: vehicle.engine.sea_surface().significant_wave_height(),
    };
    vehicle.sink.on_post_step(&record);
    true
}
