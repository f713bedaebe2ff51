//! # ASVCore Demos
//!
//! Runnable scenarios for manual inspection of the ASV simulation core.
//!
//! ## Usage
//!
//! ```bash
//! # Run the single-vessel wave-glider scenario
//! cargo run --bin asvcore-demos wave-glider
//!
//! # Run the small swarm scenario
//! cargo run --bin asvcore-demos swarm
//! ```

use std::sync::Arc;

use anyhow::Result;
use log::{error, info};

mod swarm_scenario;
mod wave_glider_scenario;

fn main() -> Result<()> {
    env_logger::init();

    info!("ASVCore demos - 6-DOF ASV / wave-glider simulation core");

    let args: Vec<String> = std::env::args().collect();
    let scenario = args.get(1).map(|s| s.as_str()).unwrap_or("wave-glider");

    match scenario {
        "wave-glider" => {
            info!("Running wave-glider forward-motion scenario...");
            wave_glider_scenario::run()?;
        }
        "swarm" => {
            info!("Running small swarm scenario...");
            swarm_scenario::run()?;
        }
        other => {
            error!("Unknown scenario: {other}");
            println!("Available scenarios:");
            println!("  wave-glider   - single wave-glider under a head sea");
            println!("  swarm         - a handful of ASVs stepped in parallel");
            std::process::exit(1);
        }
    }

    info!("Demo completed successfully.");
    Ok(())
}

/// Shared vessel spec used by both scenarios: a small wave-glider-class hull.
fn sample_vessel() -> Result<asvcore_asv::AsvSpec> {
    Ok(asvcore_asv::AsvSpec::new(
        2.1,
        0.6,
        0.8,
        0.3,
        2.5,
        300.0,
        0.3,
        0.6,
        0.6,
        asvcore_geometry::Coord3D::zero(),
        0.2,
    )?)
}

fn sample_sea() -> Result<Arc<asvcore_waves::SeaSurface>> {
    Ok(Arc::new(asvcore_waves::SeaSurface::new(
        1.5,
        std::f64::consts::PI,
        42,
        8,
        16,
    )?))
}
