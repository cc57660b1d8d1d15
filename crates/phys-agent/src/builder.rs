//! Fluent builder that allocates the pool and scatters agents on a disc.
//!
//! # Usage
//!
//! ```rust
//! use phys_agent::AgentPoolBuilder;
//!
//! let (pool, rngs) = AgentPoolBuilder::new(10_000, /*seed=*/ 42)
//!     .bounds(512.0, 512.0)
//!     .spawn_radius(50.0)
//!     .build();
//!
//! assert_eq!(pool.count, 10_000);
//! assert_eq!(rngs.len(),  10_000);
//! ```

use std::f32::consts::TAU;

use crate::{AgentPool, AgentRngs};

/// Fluent builder for [`AgentPool`] + [`AgentRngs`].
///
/// Agents are scattered uniformly over a disc.  A naive `r = R * u` draw
/// would crowd the centre, so the radius is `R * sqrt(u)`.  Each agent
/// consumes exactly three draws from its own stream — scatter angle, radius,
/// heading, in that order — so a layout is fully determined by the seed.
pub struct AgentPoolBuilder {
    count:        usize,
    seed:         u64,
    bounds:       (f32, f32),
    center:       Option<(f32, f32)>,
    spawn_radius: f32,
}

impl AgentPoolBuilder {
    /// Create a builder for `count` agents using `seed` as the global RNG seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            bounds: (1.0, 1.0),
            center: None,
            spawn_radius: 0.0,
        }
    }

    /// World extent, typically the grid dimensions.  Scattered positions are
    /// wrapped into `[0, w) x [0, h)`.
    pub fn bounds(mut self, w: f32, h: f32) -> Self {
        self.bounds = (w, h);
        self
    }

    /// Disc centre.  Defaults to the middle of `bounds`.
    pub fn center(mut self, x: f32, y: f32) -> Self {
        self.center = Some((x, y));
        self
    }

    /// Disc radius in grid units.  Zero stacks every agent on the centre.
    pub fn spawn_radius(mut self, r: f32) -> Self {
        self.spawn_radius = r;
        self
    }

    /// Construct the pool, drawing every agent's scatter position and heading.
    pub fn build(self) -> (AgentPool, AgentRngs) {
        let (w, h) = self.bounds;
        let (cx, cy) = self.center.unwrap_or((w * 0.5, h * 0.5));

        let mut pool = AgentPool::new(self.count);
        let mut rngs = AgentRngs::new(self.count, self.seed);

        for (i, rng) in rngs.inner.iter_mut().enumerate() {
            let angle = rng.gen_range(0.0..TAU);
            let radius = self.spawn_radius * rng.random::<f32>().sqrt();
            let heading = rng.gen_range(0.0..TAU);

            pool.x[i] = wrap(cx + radius * angle.cos(), w);
            pool.y[i] = wrap(cy + radius * angle.sin(), h);
            pool.heading[i] = heading;
        }

        (pool, rngs)
    }
}

/// Wrap a coordinate into `[0, extent)`.
///
/// `rem_euclid` can round up to the modulus itself for tiny negative inputs;
/// the result must stay strictly below the extent.
fn wrap(v: f32, extent: f32) -> f32 {
    let wrapped = v.rem_euclid(extent);
    if wrapped >= extent { 0.0 } else { wrapped }
}
