//! A small swarm of ASVs stepped together under `SyncMode::Barrier`.

use anyhow::Result;
use log::info;

use asvcore_asv::AsvEngine;
use asvcore_geometry::Coord3D;
use asvcore_swarm::{
    AsvObservation, ClockSchedule, ControlSignal, Controller, Sink, StepRecord, SwarmRunner,
    SyncMode,
};
use asvcore_waves::SeaSurface;

struct DriftController;

impl Controller for DriftController {
    fn on_pre_step(&mut self, _observation: &AsvObservation, _sea: &SeaSurface) -> ControlSignal {
        ControlSignal::Continue {
            thrust_commands: Vec::new(),
            rudder_angle: 0.0,
        }
    }
}

struct LoggingSink {
    vehicle_index: usize,
    tick: usize,
}

impl Sink for LoggingSink {
    fn on_post_step(&mut self, record: &StepRecord) {
        if self.tick % 100 == 0 {
            info!(
                "vehicle {} t={:.1}s heave={:.3}",
                self.vehicle_index, record.time, record.position.z
            );
        }
        self.tick += 1;
    }
}

pub fn run() -> Result<()> {
    const VEHICLE_COUNT: usize = 5;

    let schedule = ClockSchedule::new(0.0, 20.0, 0.04)?;
    let mut runner = SwarmRunner::new(schedule, SyncMode::Barrier);

    for index in 0..VEHICLE_COUNT {
        let spec = crate::sample_vessel()?;
        let sea = crate::sample_sea()?;
        let engine = AsvEngine::new(
            spec,
            sea,
            Coord3D::new(index as f64 * 3.0, 0.0, 0.0),
            Coord3D::zero(),
            40.0,
        )?;
        runner.add_vehicle(
            Box::new(DriftController),
            engine,
            Box::new(LoggingSink {
                vehicle_index: index,
                tick: 0,
            }),
            false,
        );
    }

    info!("stepping {} vehicles", runner.vehicle_count());
    runner.run();
    Ok(())
}
