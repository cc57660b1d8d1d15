//! Core agent storage: `AgentPool` (SoA position/heading data) and
//! `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! The movement pass mutates positions while drawing rebound headings from
//! individual agents' RNG streams.  Keeping RNGs in a separate `AgentRngs`
//! struct lets the engine hold `&mut AgentPool` and `&mut AgentRngs` side by
//! side, and lets the sense pass borrow `x` / `y` immutably while `heading`
//! is rewritten in place:
//!
//! ```ignore
//! // engine sense pass (simplified):
//! let xs = &pool.x;
//! let ys = &pool.y;
//! pool.heading
//!     .iter_mut()
//!     .enumerate()
//!     .for_each(|(i, h)| *h = steer(xs[i], ys[i], *h));
//! ```

use phys_core::{AgentId, AgentRng};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentPool`] so the
/// engine can borrow both mutably at once during the movement pass.
///
/// Each agent's stream is derived from the global seed and its `AgentId`, so
/// draws for one agent never perturb another's — a run is reproducible even
/// when only some agents hit a rebound.
#[derive(Debug)]
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentPool ─────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let px = pool.x[agent.index()];  // O(1), cache-friendly
/// ```
///
/// Positions live in continuous grid units: an agent at `(12.7, 3.2)`
/// occupies the cell `(12, 3)` once discretized.  The pool itself never
/// wraps or clamps — movement code owns those rules.
#[derive(Debug)]
pub struct AgentPool {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Horizontal position in grid units, kept in `[0, width)` by the engine.
    pub x: Vec<f32>,

    /// Vertical position in grid units, kept in `[0, height)` by the engine.
    pub y: Vec<f32>,

    /// Travel direction in radians, kept in `[0, TAU)` by the engine.
    pub heading: Vec<f32>,
}

impl AgentPool {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Position of one agent.
    #[inline]
    pub fn position(&self, agent: AgentId) -> (f32, f32) {
        (self.x[agent.index()], self.y[agent.index()])
    }

    /// Heading of one agent, in radians.
    #[inline]
    pub fn heading_of(&self, agent: AgentId) -> f32 {
        self.heading[agent.index()]
    }

    // ── Package-private constructor used by AgentPoolBuilder ──────────────

    pub(crate) fn new(count: usize) -> Self {
        Self {
            count,
            x: vec![0.0; count],
            y: vec![0.0; count],
            heading: vec![0.0; count],
        }
    }
}
