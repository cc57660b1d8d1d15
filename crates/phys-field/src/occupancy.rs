//! Occupancy grid: per-cell agent counts for collision checks.
//!
//! Tracks how many agents currently stand in each cell.  The movement pass
//! keeps it in lockstep with positions: `vacate` the old cell, `occupy` the
//! new one.  Counts (rather than a bitmap) let several agents share a cell
//! when collisions are disabled without losing track of who is where.

use crate::field::slot;

/// Dense `width x height` grid of agent counts.
///
/// Uses the same cell addressing as `TrailField`, so a position maps to the
/// same cell in both grids.
#[derive(Debug)]
pub struct OccupancyGrid {
    width:  u32,
    height: u32,
    counts: Vec<u32>,
}

impl OccupancyGrid {
    /// Allocate an all-empty grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            counts: vec![0; width as usize * height as usize],
        }
    }

    /// Row-major slot of the cell containing `(x, y)`, or `None` out of
    /// bounds.
    #[inline]
    pub fn cell_index(&self, x: f32, y: f32) -> Option<usize> {
        slot(self.width, self.height, x, y)
    }

    /// Record one agent entering the cell containing `(x, y)`.
    /// Out-of-bounds positions are ignored.
    #[inline]
    pub fn occupy(&mut self, x: f32, y: f32) {
        if let Some(i) = self.cell_index(x, y) {
            self.counts[i] += 1;
        }
    }

    /// Record one agent leaving the cell containing `(x, y)`.
    /// Saturates at zero; out-of-bounds positions are ignored.
    #[inline]
    pub fn vacate(&mut self, x: f32, y: f32) {
        if let Some(i) = self.cell_index(x, y) {
            self.counts[i] = self.counts[i].saturating_sub(1);
        }
    }

    /// Number of agents in the cell containing `(x, y)`.  Out-of-bounds
    /// reads are `0`.
    #[inline]
    pub fn count_at(&self, x: f32, y: f32) -> u32 {
        match self.cell_index(x, y) {
            Some(i) => self.counts[i],
            None => 0,
        }
    }

    /// `true` if at least one agent stands in the cell containing `(x, y)`.
    #[inline]
    pub fn is_occupied(&self, x: f32, y: f32) -> bool {
        self.count_at(x, y) > 0
    }

    /// Number of cells holding at least one agent.
    pub fn occupied_cells(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Sum of all counts.  Equals the population size whenever the grid is
    /// in lockstep with agent positions.
    pub fn total_count(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Reset every count to zero.
    pub fn clear(&mut self) {
        self.counts.fill(0);
    }
}
