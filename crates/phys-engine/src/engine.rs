//! The `SimulationEngine` struct and its step loop.

use std::f32::consts::TAU;

use phys_agent::{AgentPool, AgentPoolBuilder, AgentRngs};
use phys_core::angle::heading_vec;
use phys_core::{CoreResult, ParameterSet};
use phys_field::{OccupancyGrid, TrailField};

use crate::SteerContext;

/// The simulation: a trail field plus the agent population steering through
/// it.
///
/// `step()` runs the three-pass update:
///
/// 1. **Decay**: every trail cell is multiplied by `decay_factor`.
/// 2. **Sense pass** (optionally parallel with the `parallel` feature): each
///    agent compares its three sensor readings, turns, and blends in centre
///    attraction.  Writes nothing but the agent's own heading.
/// 3. **Move pass** (sequential, ascending `AgentId` for determinism): each
///    agent advances `move_distance` along its heading, wraps toroidally,
///    and deposits `deposit_value` into the cell it lands in.  With
///    `collision_enabled`, an agent whose target cell is a *different* cell
///    already holding an agent stays put and redraws its heading from its
///    own RNG stream instead.
///
/// Create via [`SimulationEngine::new`]; it rejects out-of-domain parameters
/// so the passes never have to re-check them.
#[derive(Debug)]
pub struct SimulationEngine {
    /// Parameters the engine was built with.  Tuning fields (angles,
    /// distances, deposit, decay, attraction, collision) are re-read every
    /// step and may be edited in place; structural fields (grid dimensions,
    /// seed, population factor) only take effect through
    /// [`reset`](Self::reset).
    pub params: ParameterSet,

    /// Shared trail field all agents deposit into and sense from.
    pub field: TrailField,

    /// Agent positions and headings (SoA arrays).
    pub pool: AgentPool,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// Per-cell agent counts, kept in lockstep with `pool` positions by the
    /// move pass.
    pub occupancy: OccupancyGrid,

    /// Completed steps since construction or the last reset.
    pub steps: u64,
}

impl SimulationEngine {
    // ── Construction ──────────────────────────────────────────────────────

    /// Validate `params`, then build the field and scatter the population
    /// on the spawn disc around the grid centre.
    pub fn new(params: ParameterSet) -> CoreResult<Self> {
        params.validate()?;

        let field = TrailField::new(params.grid_width, params.grid_height);
        let (pool, rngs) = AgentPoolBuilder::new(params.agent_count(), params.seed)
            .bounds(params.grid_width as f32, params.grid_height as f32)
            .spawn_radius(params.spawn_radius)
            .build();

        let mut occupancy = OccupancyGrid::new(params.grid_width, params.grid_height);
        for i in 0..pool.count {
            occupancy.occupy(pool.x[i], pool.y[i]);
        }

        Ok(Self {
            params,
            field,
            pool,
            rngs,
            occupancy,
            steps: 0,
        })
    }

    /// Tear the world down and rebuild it from `params`: fresh field, fresh
    /// spawn, step counter back to zero.
    ///
    /// Validation happens before anything is touched — on error, the engine
    /// is exactly as it was.
    pub fn reset(&mut self, params: ParameterSet) -> CoreResult<()> {
        *self = Self::new(params)?;
        Ok(())
    }

    /// Number of agents in the population.
    pub fn agent_count(&self) -> usize {
        self.pool.count
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance the simulation by one step.
    pub fn step(&mut self) {
        self.field.decay(self.params.decay_factor);
        self.sense_pass();
        self.move_pass();
        self.steps += 1;
    }

    /// Advance the simulation by `n` steps.
    pub fn run_steps(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Rewrite every agent's heading from its sensor readings.
    ///
    /// Reads the field and positions; writes only `pool.heading`.  Each
    /// agent's result depends on no other agent's, so the `parallel` feature
    /// can fan this across Rayon's thread pool without changing output.
    fn sense_pass(&mut self) {
        let ctx = SteerContext::new(&self.params, &self.field);
        // Explicit field borrows so the borrow checker sees disjoint access.
        let xs = &self.pool.x;
        let ys = &self.pool.y;

        #[cfg(not(feature = "parallel"))]
        self.pool
            .heading
            .iter_mut()
            .enumerate()
            .for_each(|(i, h)| *h = ctx.steer(xs[i], ys[i], *h));

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.pool
                .heading
                .par_iter_mut()
                .enumerate()
                .for_each(|(i, h)| *h = ctx.steer(xs[i], ys[i], *h));
        }
    }

    /// Advance every agent along its heading and deposit trail where it
    /// lands.
    ///
    /// Sequential in ascending `AgentId`: with collisions on, whether a cell
    /// is free depends on which agents moved before you, and fixing the
    /// order fixes the outcome.  An earlier agent vacating a cell frees it
    /// for later agents in the same pass.
    fn move_pass(&mut self) {
        let dist = self.params.move_distance;
        let deposit = self.params.deposit_value;
        let collisions = self.params.collision_enabled;

        for i in 0..self.pool.count {
            let (dx, dy) = heading_vec(self.pool.heading[i]);
            let (nx, ny) = self.field.wrap_position(
                self.pool.x[i] + dx * dist,
                self.pool.y[i] + dy * dist,
            );

            if collisions && self.blocked(i, nx, ny) {
                // Bounce: stay put, leave this step's deposit unmade, and
                // pick a fresh direction from the agent's own stream.
                self.pool.heading[i] = self.rngs.inner[i].gen_range(0.0..TAU);
                continue;
            }

            self.occupancy.vacate(self.pool.x[i], self.pool.y[i]);
            self.occupancy.occupy(nx, ny);
            self.pool.x[i] = nx;
            self.pool.y[i] = ny;
            self.field.deposit(nx, ny, deposit);
        }
    }

    /// `true` if moving agent `i` to `(nx, ny)` would enter an occupied cell
    /// other than its own.  Sub-cell moves within the agent's current cell
    /// are never blocked.
    fn blocked(&self, i: usize, nx: f32, ny: f32) -> bool {
        let own = self.occupancy.cell_index(self.pool.x[i], self.pool.y[i]);
        let target = self.occupancy.cell_index(nx, ny);
        target != own && self.occupancy.is_occupied(nx, ny)
    }
}
