//! `render` — BMP frame export for a physarum run.
//!
//! Steps the simulation once per frame and writes `frame_count` frames
//! into the configured output directory. An optional argument names a
//! JSON parameter file; without it the run uses the built-in defaults
//! (512×512 grid, 250 frames into `renders/`).
//!
//! Run with:
//!   cargo run -p render --release [-- params.json]

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};

use phys_core::ParameterSet;
use phys_engine::SimulationEngine;
use phys_output::{frame_path, BmpWriter, RenderExporter};

fn load_params() -> Result<ParameterSet> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading parameter file {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
        }
        None => Ok(ParameterSet::default()),
    }
}

fn main() -> Result<()> {
    // 1. Parameters: defaults, or a JSON file named on the command line.
    let params = load_params()?;
    let frames = params.frame_count;

    println!("=== render — physarum frame export ===");
    println!(
        "Grid: {}×{}  |  Frames: {}  |  Seed: {}",
        params.grid_width, params.grid_height, frames, params.seed
    );

    // 2. Output location: numbered frames derived from <output_path>/frame.bmp.
    let dir = params.output_path.clone();
    fs::create_dir_all(&dir)?;
    let base = dir.join("frame.bmp");

    // 3. Engine and exporter.
    let mut engine = SimulationEngine::new(params)?;
    println!("Spawned {} agents", engine.agent_count());
    let mut writer = BmpWriter;

    // 4. Render.
    let t0 = Instant::now();
    RenderExporter::new(&mut engine, &mut writer).render_animation(&base, frames)?;
    let elapsed = t0.elapsed();

    // 5. Summary.
    println!(
        "Wrote {} frames in {:.3} s ({:.1} frames/s)",
        frames,
        elapsed.as_secs_f64(),
        f64::from(frames) / elapsed.as_secs_f64(),
    );
    println!("  first: {}", frame_path(&base, 1).display());
    println!("  last:  {}", frame_path(&base, frames).display());

    Ok(())
}
