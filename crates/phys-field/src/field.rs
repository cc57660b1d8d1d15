//! Trail field: the shared chemoattractant layer agents deposit into and
//! steer by.
//!
//! # Cell addressing
//!
//! Cells are addressed by *continuous* coordinates; every accessor truncates
//! to the containing cell itself.  Out-of-bounds coordinates are legal
//! everywhere: sampling reads `0.0`, depositing is dropped.  Callers that
//! want toroidal behaviour wrap positions first via
//! [`TrailField::wrap_position`].

/// Ceiling on any single cell's value.
///
/// Deposits accumulate but never push a cell past this, which keeps the
/// field inside the 8-bit range renders quantize to.
pub const SATURATION: f32 = 255.0;

/// Row-major slot for `(x, y)` on a `width x height` grid, or `None` when the
/// coordinate lies outside it.  Shared by [`TrailField`] and the occupancy
/// grid so both agree on which cell a position belongs to.
#[inline]
pub(crate) fn slot(width: u32, height: u32, x: f32, y: f32) -> Option<usize> {
    if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
        return None;
    }
    let (cx, cy) = (x as u32, y as u32);
    if cx >= width || cy >= height {
        return None;
    }
    Some((cy * width + cx) as usize)
}

// ── TrailField ────────────────────────────────────────────────────────────────

/// Dense `width x height` grid of trail concentrations.
///
/// Every cell holds a value in `[0.0, SATURATION]`.  The two mutating
/// operations are [`deposit`](Self::deposit) (pointwise, saturating) and
/// [`decay`](Self::decay) (whole-field multiply); both preserve that range
/// for in-range inputs, so the raw cell slice can be handed straight to a
/// renderer.
#[derive(Debug)]
pub struct TrailField {
    width:  u32,
    height: u32,
    cells:  Vec<f32>,
}

impl TrailField {
    /// Allocate an all-zero field.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![0.0; width as usize * height as usize],
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells (`width * height`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    // ── Cell access ───────────────────────────────────────────────────────

    /// Row-major slot of the cell containing `(x, y)`, or `None` out of
    /// bounds.
    #[inline]
    pub fn cell_index(&self, x: f32, y: f32) -> Option<usize> {
        slot(self.width, self.height, x, y)
    }

    /// Concentration at `(x, y)`.  Out-of-bounds reads are `0.0` — the world
    /// beyond the grid holds no trail.
    #[inline]
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        match self.cell_index(x, y) {
            Some(i) => self.cells[i],
            None => 0.0,
        }
    }

    /// Add `amount` to the cell containing `(x, y)`, saturating at
    /// [`SATURATION`].  Out-of-bounds deposits are dropped.
    #[inline]
    pub fn deposit(&mut self, x: f32, y: f32, amount: f32) {
        if let Some(i) = self.cell_index(x, y) {
            self.cells[i] = (self.cells[i] + amount).min(SATURATION);
        }
    }

    /// Raw cell slice in row-major order, for rendering and stats.
    pub fn cells(&self) -> &[f32] {
        &self.cells
    }

    // ── Whole-field operations ────────────────────────────────────────────

    /// Multiply every cell by `factor`, the fraction of trail retained.
    ///
    /// `1.0` keeps the field intact, `0.0` clears it.
    pub fn decay(&mut self, factor: f32) {
        for c in &mut self.cells {
            *c *= factor;
        }
    }

    /// Reset every cell to zero.
    pub fn clear(&mut self) {
        self.cells.fill(0.0);
    }

    // ── Toroidal wrap ─────────────────────────────────────────────────────

    /// Wrap a continuous position into `[0, width) x [0, height)`.
    pub fn wrap_position(&self, x: f32, y: f32) -> (f32, f32) {
        let w = self.width as f32;
        let h = self.height as f32;
        let mut wx = x.rem_euclid(w);
        let mut wy = y.rem_euclid(h);
        // rem_euclid can round up to the modulus itself for tiny negative
        // inputs; the result must stay strictly below the extent.
        if wx >= w {
            wx = 0.0;
        }
        if wy >= h {
            wy = 0.0;
        }
        (wx, wy)
    }

    // ── Aggregates ────────────────────────────────────────────────────────

    /// Largest cell value.  `0.0` on an empty or all-zero field.
    pub fn max_value(&self) -> f32 {
        self.cells.iter().copied().fold(0.0, f32::max)
    }

    /// Sum of all cells, accumulated in `f64` so large grids don't lose
    /// low-order deposits.
    pub fn total(&self) -> f64 {
        self.cells.iter().map(|&c| c as f64).sum()
    }

    /// Mean cell value.  `0.0` on an empty field.
    pub fn mean_value(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.total() / self.cells.len() as f64
    }
}
