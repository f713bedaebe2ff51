//! A single wave-glider advancing under wave-driven thrust in a head sea.

use anyhow::Result;
use log::info;

use asvcore_asv::AsvEngine;
use asvcore_geometry::Coord3D;

pub fn run() -> Result<()> {
    let spec = crate::sample_vessel()?;
    let sea = crate::sample_sea()?;

    let mut engine = AsvEngine::new(spec, sea, Coord3D::zero(), Coord3D::zero(), 40.0)?;

    let total_steps = (60.0 / 0.04) as usize;
    for step in 0..total_steps {
        engine.wave_glider_compute_dynamics(0.0, 0.04)?;
        if step % 250 == 0 {
            info!(
                "t={:.1}s origin=({:.3}, {:.3}, {:.3}) surge_velocity={:.3} m/s",
                engine.simulation_time(),
                engine.origin().x,
                engine.origin().y,
                engine.origin().z,
                engine.velocity().surge,
            );
        }
    }

    info!(
        "final position ({:.3}, {:.3}, {:.3}) after {:.1}s",
        engine.origin().x,
        engine.origin().y,
        engine.origin().z,
        engine.simulation_time(),
    );
    Ok(())
}
