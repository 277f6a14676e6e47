//! # Particle-mesh grid (2D)
//!
//! A fixed lattice of `width x height` grid points spaced `cell_size` apart.
//! Grid point `(ix, iy)` sits at `(ix * cell_size, iy * cell_size)` and has the
//! flat index `iy * width + ix`.
//!
//! Each step the mesh simulator uses the grid as scratch space:
//!
//! 1. [`Grid::locate`] finds the cell a body sits in (and enforces the wall),
//! 2. [`Grid::deposit`] spreads the body's mass over the 4 corners of that cell
//!    with cloud-in-cell (bilinear) weights,
//! 3. [`Grid::solve_field`] sums pairwise gravity between all loaded grid points,
//! 4. [`Grid::interpolate`] reads the field back at the body with the same weights.
//!
//! Both fields are overwritten every step; nothing in here survives from one
//! step to the next.
//!
//! ## Domain and stencil edge
//!
//! Bodies live in `[0, width * cell_size) x [0, height * cell_size)`. A body in
//! the last column or last row of cells has corners past the end of the lattice.
//! Those corners are dropped, for deposition as well as for interpolation, so
//! such a body only exchanges the share of its weight that lands on real grid
//! points.

use anyhow::{ensure, Result};
use rayon::prelude::*;

use crate::simulation::states::{Body, NVec2};

/// Gravitational constant of the normalized mesh unit system
pub const G_MESH: f64 = 1.0;

/// Where a body sits inside the grid for the current step
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellLocation {
    pub ix: usize,
    pub iy: usize,
    pub offset: NVec2, // position relative to grid point (ix, iy), each component in [0, cell_size)
}

/// Flat index and bilinear weight of each of the 4 corners of a cell,
/// `None` for corners past the last column or row
pub type Stencil = [Option<(usize, f64)>; 4];

#[derive(Debug, Clone)]
pub struct Grid {
    cell_size: f64,
    width: usize,
    height: usize,
    mass_field: Vec<f64>,
    acceleration_field: Vec<NVec2>,
}

impl Grid {
    pub fn new(cell_size: f64, width: usize, height: usize) -> Result<Self> {
        ensure!(cell_size.is_finite() && cell_size > 0.0, "cell size must be positive, got {cell_size}");
        ensure!(width > 0 && height > 0, "grid must have at least one point per axis, got {width}x{height}");

        let n = width
            .checked_mul(height)
            .ok_or_else(|| anyhow::anyhow!("grid {width}x{height} is too large"))?;

        Ok(Self {
            cell_size,
            width,
            height,
            mass_field: vec![0.0; n],
            acceleration_field: vec![NVec2::zeros(); n],
        })
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn index(&self, ix: usize, iy: usize) -> usize {
        iy * self.width + ix
    }

    pub fn coordinates(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Size of the region bodies are generated in
    pub fn extent(&self) -> NVec2 {
        NVec2::new(self.width as f64, self.height as f64) * self.cell_size
    }

    /// Position a body is clamped to when it leaves through the far walls:
    /// the largest position still inside the domain on each axis
    pub fn upper_edge(&self) -> NVec2 {
        NVec2::new(
            upper_wall(self.width, self.cell_size),
            upper_wall(self.height, self.cell_size),
        )
    }

    pub fn mass_field(&self) -> &[f64] {
        &self.mass_field
    }

    pub fn acceleration_field(&self) -> &[NVec2] {
        &self.acceleration_field
    }

    pub fn total_mass(&self) -> f64 {
        self.mass_field.iter().sum()
    }

    /// Find the cell containing `body`.
    ///
    /// A body whose cell falls outside the domain on either axis is put back on
    /// the wall it crossed (0 or [`Grid::upper_edge`]) and loses all of its velocity.
    pub fn locate(&self, body: &mut Body) -> CellLocation {
        let (ix, hit_x) = clamp_axis(&mut body.x.x, self.width, self.cell_size);
        let (iy, hit_y) = clamp_axis(&mut body.x.y, self.height, self.cell_size);

        if hit_x || hit_y {
            body.v = NVec2::zeros();
        }

        let corner = NVec2::new(ix as f64, iy as f64) * self.cell_size;
        CellLocation {
            ix,
            iy,
            offset: body.x - corner,
        }
    }

    /// Corner indices and cloud-in-cell weights for `loc`
    pub fn stencil(&self, loc: &CellLocation) -> Stencil {
        let fx = loc.offset.x / self.cell_size;
        let fy = loc.offset.y / self.cell_size;
        let (wx1, wx2) = (1.0 - fx, fx);
        let (wy1, wy2) = (1.0 - fy, fy);

        let corner = |dx: usize, dy: usize, w: f64| {
            let (ix, iy) = (loc.ix + dx, loc.iy + dy);
            (ix < self.width && iy < self.height).then(|| (self.index(ix, iy), w))
        };

        [
            corner(0, 0, wx1 * wy1),
            corner(1, 0, wx2 * wy1),
            corner(0, 1, wx1 * wy2),
            corner(1, 1, wx2 * wy2),
        ]
    }

    /// True when no corner of `loc`'s cell lies past the last column or row
    pub fn has_full_stencil(&self, loc: &CellLocation) -> bool {
        loc.ix + 1 < self.width && loc.iy + 1 < self.height
    }

    pub fn clear(&mut self) {
        self.mass_field.fill(0.0);
    }

    /// Add `mass` to the in-range corners around `loc`. Returns false when
    /// some corner was dropped.
    pub fn deposit(&mut self, mass: f64, loc: &CellLocation) -> bool {
        for (i, w) in self.stencil(loc).into_iter().flatten() {
            self.mass_field[i] += mass * w;
        }
        self.has_full_stencil(loc)
    }

    /// Recompute the acceleration at every loaded grid point from every other
    /// loaded grid point.
    ///
    /// O(cells^2). Grid points without mass get a zero field and contribute
    /// nothing. Distances are taken between grid points, never sub-cell.
    pub fn solve_field(&mut self) {
        let mass = &self.mass_field;
        let width = self.width;
        let cell_size = self.cell_size;

        self.acceleration_field
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, a)| {
                *a = NVec2::zeros();
                if mass[i] == 0.0 {
                    return;
                }

                let (xi, yi) = ((i % width) as f64, (i / width) as f64);

                for (j, &mj) in mass.iter().enumerate() {
                    if i == j || mj == 0.0 {
                        continue;
                    }

                    // r points from grid point i to grid point j
                    let r = NVec2::new((j % width) as f64 - xi, (j / width) as f64 - yi) * cell_size;
                    let d2 = r.norm_squared();
                    let d = d2.sqrt();

                    *a += (G_MESH * mj / d2) * (r / d);
                }
            });
    }

    /// Field at `loc`, bilinearly weighted over its in-range corners
    pub fn interpolate(&self, loc: &CellLocation) -> NVec2 {
        self.stencil(loc)
            .into_iter()
            .flatten()
            .fold(NVec2::zeros(), |acc, (i, w)| acc + self.acceleration_field[i] * w)
    }
}

/// Cell index of `pos` on one axis with `cells` grid points. Out-of-range (or NaN)
/// positions are moved onto the nearest wall; the flag reports a wall hit.
fn clamp_axis(pos: &mut f64, cells: usize, cell_size: f64) -> (usize, bool) {
    let cell = (*pos / cell_size).floor();

    if cell.is_nan() || cell < 0.0 {
        *pos = 0.0;
        (0, true)
    } else if cell >= cells as f64 {
        *pos = upper_wall(cells, cell_size);
        (cells - 1, true)
    } else {
        (cell as usize, false)
    }
}

/// Largest position inside `[0, cells * cell_size)`
fn upper_wall(cells: usize, cell_size: f64) -> f64 {
    (cells as f64 * cell_size).next_down()
}
