//! `headless` — batch simulation run with per-step statistics.
//!
//! Steps a 256×256 simulation for 500 steps with no rendering and
//! writes one CSV row per step to `output/headless/step_stats.csv`.
//!
//! Run with:
//!   cargo run -p headless --release

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use phys_core::ParameterSet;
use phys_engine::SimulationEngine;
use phys_output::StatsWriter;

// ── Constants ─────────────────────────────────────────────────────────────────

const GRID:  u32 = 256;
const STEPS: u64 = 500;
const SEED:  u64 = 5831;
/// Agents per grid cell; 256×256 × 0.15 ≈ 9.8 K agents.
const POPULATION_FACTOR: f32 = 0.15;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== headless — physarum batch run ===");
    println!("Grid: {GRID}×{GRID}  |  Steps: {STEPS}  |  Seed: {SEED}");
    println!();

    // 1. Parameters: defaults except grid size and population.
    let params = ParameterSet {
        grid_width: GRID,
        grid_height: GRID,
        particles_population_factor: POPULATION_FACTOR,
        spawn_radius: 80.0,
        seed: SEED,
        ..ParameterSet::default()
    };

    // 2. Engine.
    let mut engine = SimulationEngine::new(params)?;
    println!("Spawned {} agents", engine.agent_count());

    // 3. Stats output.
    std::fs::create_dir_all("output/headless")?;
    let mut stats = StatsWriter::new(Path::new("output/headless"))?;

    // 4. Run.
    let t0 = Instant::now();
    for _ in 0..STEPS {
        engine.step();
        stats.record(&engine)?;
    }
    stats.finish()?;
    let elapsed = t0.elapsed();

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  {:.1} steps/s  |  {:.2} M agent-updates/s",
        STEPS as f64 / elapsed.as_secs_f64(),
        STEPS as f64 * engine.agent_count() as f64 / elapsed.as_secs_f64() / 1e6,
    );
    println!();
    println!("{:<16} {:>12}", "Metric", "Value");
    println!("{}", "-".repeat(30));
    println!("{:<16} {:>12}", "steps", engine.steps);
    println!("{:<16} {:>12.1}", "trail total", engine.field.total());
    println!("{:<16} {:>12.3}", "trail mean", engine.field.mean_value());
    println!("{:<16} {:>12.1}", "trail max", engine.field.max_value());
    println!(
        "{:<16} {:>12}",
        "occupied cells",
        engine.occupancy.occupied_cells()
    );
    println!();
    println!("Wrote output/headless/step_stats.csv");

    Ok(())
}
