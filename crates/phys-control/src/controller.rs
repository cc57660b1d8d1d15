//! The Idle/Running state machine around a [`SimulationEngine`].
//!
//! | Operation             | Allowed in  | Effect on success                         |
//! |-----------------------|-------------|-------------------------------------------|
//! | [`start`]             | Idle        | revalidate params, engage timer, → Running |
//! | [`stop`]              | Running     | cancel timer, → Idle                      |
//! | [`reset`]             | both        | validate, halt if running, rebuild engine |
//! | [`on_tick`]           | any         | step + redraw, or halt on a stale tick    |
//! | [`render_single_frame`] / [`render_animation`] | Idle | step and write frames |
//!
//! [`start`]: RunController::start
//! [`stop`]: RunController::stop
//! [`reset`]: RunController::reset
//! [`on_tick`]: RunController::on_tick
//! [`render_single_frame`]: RunController::render_single_frame
//! [`render_animation`]: RunController::render_animation

use std::fmt;
use std::path::Path;

use phys_core::ParameterSet;
use phys_engine::SimulationEngine;
use phys_output::{ImageWriter, RenderExporter};

use crate::error::{ControlError, ControlResult};
use crate::host::TimerHost;
use crate::scheduler::FrameScheduler;

// ── States and tick outcomes ────────────────────────────────────────────

/// Lifecycle state of a [`RunController`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunState {
    /// No timer registered; parameters may be edited and frames rendered.
    Idle,
    /// Timer registered; the engine advances one step per tick.
    Running,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Idle => write!(f, "idle"),
            RunState::Running => write!(f, "running"),
        }
    }
}

/// What the host should conclude from a tick callback.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TickFlow {
    /// The engine stepped; keep the timer firing.
    Continue,
    /// The run has halted; the timer has already been cancelled.
    Halt,
}

// ── Controller ──────────────────────────────────────────────────────────

/// Drives a [`SimulationEngine`] from a host-owned timer.
///
/// The controller owns the engine and the host handle. All transitions
/// funnel through [`halt`](RunController::halt), which cancels the
/// timer at most once and clears the stop flag, so no sequence of
/// `start`/`stop`/`reset`/stale ticks can leak a timer registration.
pub struct RunController<H: TimerHost> {
    engine:         SimulationEngine,
    host:           H,
    scheduler:      FrameScheduler,
    state:          RunState,
    stop_requested: bool,
}

impl<H: TimerHost> RunController<H> {
    /// Build a controller in the [`Idle`](RunState::Idle) state.
    pub fn new(params: ParameterSet, host: H) -> ControlResult<Self> {
        let frame_rate = params.frame_rate;
        let engine = SimulationEngine::new(params)?;
        Ok(Self {
            engine,
            host,
            scheduler: FrameScheduler::new(frame_rate),
            state: RunState::Idle,
            stop_requested: false,
        })
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Whether a stop has been requested but not yet observed by a tick.
    ///
    /// [`stop`](RunController::stop) halts synchronously, so this reads
    /// `true` only inside the stop path itself; it is exposed for hosts
    /// that mirror the flag in their UI.
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    /// Mutable engine access for editing tuning parameters while idle.
    ///
    /// Edits take effect on the next step; [`start`](RunController::start)
    /// revalidates the full set before engaging the timer.
    pub fn engine_mut(&mut self) -> &mut SimulationEngine {
        &mut self.engine
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // ── Transitions ─────────────────────────────────────────────────────

    /// Begin a run: revalidate parameters, register the frame timer.
    ///
    /// Fails with [`ControlError::InvalidTransition`] when already
    /// running and with [`ControlError::Parameter`] when the current
    /// parameter set no longer validates; neither failure changes state
    /// or registers a timer.
    pub fn start(&mut self) -> ControlResult<()> {
        self.ensure_idle("start")?;
        self.engine.params.validate()?;
        // Pick up a frame rate edited since construction or last reset.
        self.scheduler = FrameScheduler::new(self.engine.params.frame_rate);
        self.stop_requested = false;
        self.scheduler.engage(&mut self.host);
        self.state = RunState::Running;
        Ok(())
    }

    /// End a run synchronously.
    ///
    /// On return the timer is cancelled, the state is
    /// [`Idle`](RunState::Idle) and the stop flag is clear again.
    pub fn stop(&mut self) -> ControlResult<()> {
        if self.state != RunState::Running {
            return Err(ControlError::InvalidTransition {
                from:      self.state,
                requested: "stop",
            });
        }
        self.stop_requested = true;
        self.halt();
        Ok(())
    }

    /// Replace the parameter set and rebuild the simulation from it.
    ///
    /// Validation runs first: on failure the controller is left fully
    /// untouched, including a run in progress. On success a running
    /// timer is cancelled, the engine respawns from the new set and the
    /// scheduler adopts the new frame rate.
    pub fn reset(&mut self, params: ParameterSet) -> ControlResult<()> {
        params.validate()?;
        self.halt();
        self.engine.reset(params)?;
        self.scheduler = FrameScheduler::new(self.engine.params.frame_rate);
        Ok(())
    }

    /// Timer callback: advance one step and request a repaint.
    ///
    /// A tick that arrives when the controller is not running (a stale
    /// fire queued before a cancel, or a host driving manually) halts
    /// instead of stepping, so the engine never advances outside a run.
    pub fn on_tick(&mut self) -> TickFlow {
        if self.state != RunState::Running || self.stop_requested {
            self.halt();
            return TickFlow::Halt;
        }
        self.engine.step();
        self.host.request_redraw();
        TickFlow::Continue
    }

    /// Cancel the timer and return to [`Idle`](RunState::Idle).
    ///
    /// Safe to call from any state; the scheduler cancels at most once.
    pub fn halt(&mut self) {
        self.scheduler.disengage(&mut self.host);
        self.state = RunState::Idle;
        self.stop_requested = false;
    }

    // ── Rendering ───────────────────────────────────────────────────────

    /// Step once and write the resulting frame to `path`.
    ///
    /// Rejected while running: rendering steps the engine, and a timer
    /// firing mid-export would interleave two drivers.
    pub fn render_single_frame<W: ImageWriter>(
        &mut self,
        writer: &mut W,
        path: &Path,
    ) -> ControlResult<()> {
        self.ensure_idle("render")?;
        RenderExporter::new(&mut self.engine, writer).render_single_frame(path)?;
        Ok(())
    }

    /// Step and write `frames` numbered frames derived from `base`.
    pub fn render_animation<W: ImageWriter>(
        &mut self,
        writer: &mut W,
        base: &Path,
        frames: u32,
    ) -> ControlResult<()> {
        self.ensure_idle("render")?;
        RenderExporter::new(&mut self.engine, writer).render_animation(base, frames)?;
        Ok(())
    }

    fn ensure_idle(&self, requested: &'static str) -> ControlResult<()> {
        if self.state != RunState::Idle {
            return Err(ControlError::InvalidTransition {
                from: self.state,
                requested,
            });
        }
        Ok(())
    }
}
