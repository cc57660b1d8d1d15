//! The tunable simulation parameters and their domain validation.
//!
//! # Design
//!
//! `ParameterSet` is the single injected configuration object: the host
//! assembles one from its property storage and hands it to the engine at
//! construction and on every `reset()`.  The engine treats it as an
//! immutable-per-step snapshot and never observes an out-of-range value —
//! [`validate`][ParameterSet::validate] rejects bad sets at the engine
//! boundary, and [`clamped`][ParameterSet::clamped] lets loosely-validated
//! host input (sliders, config files) be forced into domain first.
//!
//! Angles are degrees at this boundary, matching the host-facing property
//! names; the engine converts to radians once per step.

use std::path::PathBuf;

use crate::{CoreError, CoreResult};

// ── Domain constants ──────────────────────────────────────────────────────────

/// Inclusive bounds of each trail-grid axis, in cells.
pub const GRID_MIN: u32 = 8;
pub const GRID_MAX: u32 = 4096;

/// Upper bound on `particles_population_factor` (mean agents per grid cell).
pub const POPULATION_FACTOR_MAX: f32 = 8.0;

/// Inclusive frame-rate bounds, in simulation steps per wall-clock second.
pub const FRAME_RATE_MIN: u32 = 1;
pub const FRAME_RATE_MAX: u32 = 120;

// ── ParameterSet ──────────────────────────────────────────────────────────────

/// Tunable simulation constants, read by the engine each step.
///
/// | Field                         | Domain            | Default |
/// |-------------------------------|-------------------|---------|
/// | `sensor_angle`                | > 0 (degrees)     | 27.5    |
/// | `sensor_distance`             | > 0 (cells)       | 23.0    |
/// | `rotation_angle`              | finite (degrees)  | 36.0    |
/// | `move_distance`               | > 0 (cells)       | 2.77    |
/// | `deposit_value`               | ≥ 0               | 5.0     |
/// | `decay_factor`                | 0 ..= 1           | 0.32    |
/// | `spawn_radius`                | ≥ 0 (cells)       | 50.0    |
/// | `center_attraction`           | finite            | 1.0     |
/// | `particles_population_factor` | (0, 8]            | 1.0     |
/// | `collision_enabled`           | bool              | false   |
/// | `frame_rate`                  | 1 ..= 120         | 24      |
/// | `frame_count`                 | ≥ 1               | 250     |
/// | `grid_width` / `grid_height`  | 8 ..= 4096        | 512     |
///
/// `decay_factor` is the fraction of trail *retained* per step: 1.0 keeps
/// trails forever, 0.0 erases all history every step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterSet {
    /// Angular offset of the left/right sensors from the heading, degrees.
    pub sensor_angle: f32,
    /// How far ahead of the agent the three sensors sample, in cells.
    pub sensor_distance: f32,
    /// Heading change applied on a left/right turn decision, degrees.
    pub rotation_angle: f32,
    /// Distance travelled per step, in cells.
    pub move_distance: f32,
    /// Trail intensity added at the agent's cell each step.
    pub deposit_value: f32,
    /// Fraction of trail retained by the once-per-step global decay.
    pub decay_factor: f32,
    /// Radius of the spawn disc around the field center, in cells.
    pub spawn_radius: f32,
    /// Weight of the pull toward the field center blended into each turn.
    /// Negative values repel.
    pub center_attraction: f32,
    /// Population size driver: agents = round(factor × width × height).
    pub particles_population_factor: f32,
    /// When set, an agent cannot move into a cell occupied by another agent.
    pub collision_enabled: bool,
    /// Scheduler cadence, in steps per wall-clock second.
    pub frame_rate: u32,
    /// Base path for exported frames.
    pub output_path: PathBuf,
    /// Number of frames written by an animation export.
    pub frame_count: u32,
    /// Trail-grid width in cells.
    pub grid_width: u32,
    /// Trail-grid height in cells.
    pub grid_height: u32,
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl Default for ParameterSet {
    /// Tuning that grows a stable organic network on a 512×512 grid; angles
    /// are degrees, population is expressed as a per-cell factor.
    fn default() -> Self {
        Self {
            sensor_angle:                27.5,
            sensor_distance:             23.0,
            rotation_angle:              36.0,
            move_distance:               2.77,
            deposit_value:               5.0,
            decay_factor:                0.32,
            spawn_radius:                50.0,
            center_attraction:           1.0,
            particles_population_factor: 1.0,
            collision_enabled:           false,
            frame_rate:                  24,
            output_path:                 PathBuf::from("renders"),
            frame_count:                 250,
            grid_width:                  512,
            grid_height:                 512,
            seed:                        5831,
        }
    }
}

impl ParameterSet {
    /// Check every field against its declared domain.
    ///
    /// Returns the first violation as [`CoreError::InvalidParameter`].  All
    /// float fields must additionally be finite — NaN or infinity anywhere
    /// would poison headings and field samples.
    pub fn validate(&self) -> CoreResult<()> {
        require(
            self.sensor_angle.is_finite() && self.sensor_angle > 0.0,
            "sensor_angle", self.sensor_angle as f64, "> 0 degrees",
        )?;
        require(
            self.sensor_distance.is_finite() && self.sensor_distance > 0.0,
            "sensor_distance", self.sensor_distance as f64, "> 0",
        )?;
        require(
            self.rotation_angle.is_finite(),
            "rotation_angle", self.rotation_angle as f64, "a finite angle in degrees",
        )?;
        require(
            self.move_distance.is_finite() && self.move_distance > 0.0,
            "move_distance", self.move_distance as f64, "> 0",
        )?;
        require(
            self.deposit_value.is_finite() && self.deposit_value >= 0.0,
            "deposit_value", self.deposit_value as f64, ">= 0",
        )?;
        require(
            self.decay_factor.is_finite() && (0.0..=1.0).contains(&self.decay_factor),
            "decay_factor", self.decay_factor as f64, "0..=1",
        )?;
        require(
            self.spawn_radius.is_finite() && self.spawn_radius >= 0.0,
            "spawn_radius", self.spawn_radius as f64, ">= 0",
        )?;
        require(
            self.center_attraction.is_finite(),
            "center_attraction", self.center_attraction as f64, "a finite weight",
        )?;
        require(
            self.particles_population_factor.is_finite()
                && self.particles_population_factor > 0.0
                && self.particles_population_factor <= POPULATION_FACTOR_MAX,
            "particles_population_factor", self.particles_population_factor as f64, "(0, 8]",
        )?;
        require(
            (FRAME_RATE_MIN..=FRAME_RATE_MAX).contains(&self.frame_rate),
            "frame_rate", self.frame_rate as f64, "1..=120",
        )?;
        require(
            self.frame_count >= 1,
            "frame_count", self.frame_count as f64, ">= 1",
        )?;
        require(
            (GRID_MIN..=GRID_MAX).contains(&self.grid_width),
            "grid_width", self.grid_width as f64, "8..=4096",
        )?;
        require(
            (GRID_MIN..=GRID_MAX).contains(&self.grid_height),
            "grid_height", self.grid_height as f64, "8..=4096",
        )?;
        Ok(())
    }

    /// Return a copy with every field forced into its declared domain.
    ///
    /// Finite out-of-range values are clamped to the nearest bound;
    /// non-finite values fall back to the field default.  The result always
    /// passes [`validate`][Self::validate] — hosts can sanitize arbitrary
    /// slider/config input with one call.
    pub fn clamped(&self) -> Self {
        let d = Self::default();
        Self {
            sensor_angle:      clamp_or(self.sensor_angle, f32::EPSILON, f32::MAX, d.sensor_angle),
            sensor_distance:   clamp_or(self.sensor_distance, f32::EPSILON, f32::MAX, d.sensor_distance),
            rotation_angle:    clamp_or(self.rotation_angle, f32::MIN, f32::MAX, d.rotation_angle),
            move_distance:     clamp_or(self.move_distance, f32::EPSILON, f32::MAX, d.move_distance),
            deposit_value:     clamp_or(self.deposit_value, 0.0, f32::MAX, d.deposit_value),
            decay_factor:      clamp_or(self.decay_factor, 0.0, 1.0, d.decay_factor),
            spawn_radius:      clamp_or(self.spawn_radius, 0.0, f32::MAX, d.spawn_radius),
            center_attraction: clamp_or(self.center_attraction, f32::MIN, f32::MAX, d.center_attraction),
            particles_population_factor: clamp_or(
                self.particles_population_factor,
                f32::EPSILON,
                POPULATION_FACTOR_MAX,
                d.particles_population_factor,
            ),
            collision_enabled: self.collision_enabled,
            frame_rate:        self.frame_rate.clamp(FRAME_RATE_MIN, FRAME_RATE_MAX),
            output_path:       self.output_path.clone(),
            frame_count:       self.frame_count.max(1),
            grid_width:        self.grid_width.clamp(GRID_MIN, GRID_MAX),
            grid_height:       self.grid_height.clamp(GRID_MIN, GRID_MAX),
            seed:              self.seed,
        }
    }

    /// Population size derived from `particles_population_factor`.
    ///
    /// Factor 1.0 is one agent per grid cell; the result is never zero.
    pub fn agent_count(&self) -> usize {
        let cells = self.grid_width as f64 * self.grid_height as f64;
        let count = (self.particles_population_factor as f64 * cells).round() as usize;
        count.max(1)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn require(ok: bool, name: &'static str, value: f64, expected: &'static str) -> CoreResult<()> {
    if ok {
        Ok(())
    } else {
        Err(CoreError::InvalidParameter { name, value, expected })
    }
}

/// Clamp a finite value into `[lo, hi]`; replace a non-finite value with `fallback`.
fn clamp_or(v: f32, lo: f32, hi: f32, fallback: f32) -> f32 {
    if v.is_finite() { v.clamp(lo, hi) } else { fallback }
}
