//! `lifecycle` — driving the run controller the way a GUI host would.
//!
//! Implements [`TimerHost`] with a plain counter, then walks the full
//! lifecycle: start, tick, stop mid-run, retune parameters while idle,
//! resume, export a frame of the evolved trail, and reset.
//!
//! Run with:
//!   cargo run -p lifecycle --release

use std::path::Path;
use std::time::Duration;

use anyhow::Result;

use phys_control::{RunController, TickFlow, TimerHost};
use phys_core::{ParameterSet, TimerHandle};
use phys_output::BmpWriter;

// ── Host ──────────────────────────────────────────────────────────────────────

/// Stand-in for a GUI event loop: hands out handles, counts repaints.
#[derive(Default)]
struct LoopHost {
    next_handle: u64,
    redraws:     u64,
}

impl TimerHost for LoopHost {
    fn register_tick(&mut self, interval: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        println!(
            "[host] timer {} registered at {:.1} ms",
            handle.0,
            interval.as_secs_f64() * 1e3
        );
        handle
    }

    fn cancel_tick(&mut self, handle: TimerHandle) {
        println!("[host] timer {} cancelled", handle.0);
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

const FIRST_LEG:  u32 = 120;
const SECOND_LEG: u32 = 120;

fn main() -> Result<()> {
    println!("=== lifecycle — physarum run controller ===");

    // 1. A controller in the idle state.
    let params = ParameterSet {
        grid_width: 256,
        grid_height: 256,
        particles_population_factor: 0.2,
        spawn_radius: 60.0,
        seed: 7,
        ..ParameterSet::default()
    };
    let mut ctl = RunController::new(params.clone(), LoopHost::default())?;
    println!(
        "state: {}  |  agents: {}",
        ctl.state(),
        ctl.engine().agent_count()
    );

    // 2. First leg: start, then fire the tick callback as the host would.
    ctl.start()?;
    for _ in 0..FIRST_LEG {
        if ctl.on_tick() == TickFlow::Halt {
            break;
        }
    }
    ctl.stop()?;
    println!(
        "after leg 1: state {}, {} steps, trail total {:.0}",
        ctl.state(),
        ctl.engine().steps,
        ctl.engine().field.total()
    );

    // 3. Retune while idle. Tuning fields apply on the next step; no respawn.
    ctl.engine_mut().params.collision_enabled = true;
    ctl.engine_mut().params.deposit_value = 8.0;

    // 4. Second leg under the new tuning.
    ctl.start()?;
    for _ in 0..SECOND_LEG {
        if ctl.on_tick() == TickFlow::Halt {
            break;
        }
    }
    ctl.stop()?;
    println!(
        "after leg 2: state {}, {} steps, {} redraw requests",
        ctl.state(),
        ctl.engine().steps,
        ctl.host().redraws
    );

    // 5. A stale tick after stop halts instead of stepping.
    let flow = ctl.on_tick();
    println!("stale tick while idle: {flow:?}, still {} steps", ctl.engine().steps);

    // 6. Export one frame of the evolved trail.
    std::fs::create_dir_all("output/lifecycle")?;
    let frame = Path::new("output/lifecycle/final.bmp");
    ctl.render_single_frame(&mut BmpWriter, frame)?;
    println!("wrote {}", frame.display());

    // 7. Reset rebuilds the spawn from the same parameters.
    ctl.reset(params)?;
    println!(
        "after reset: state {}, {} steps, trail total {:.0}",
        ctl.state(),
        ctl.engine().steps,
        ctl.engine().field.total()
    );

    Ok(())
}
