//! Particle-mesh gravity
//!
//! Approximates N-body gravity by routing it through a [`Grid`]: bodies deposit
//! mass onto grid points, grid points attract each other, and the resulting
//! field is read back at each body. Cost per step is O(bodies + cells^2), so it
//! scales to far more bodies than [`crate::simulation::direct::DirectSimulator`]
//! as long as the grid stays small.
//!
//! Units are normalized (`G = 1`) and unrelated to the direct simulator's SI units.

use anyhow::{ensure, Result};
use rand::Rng;
use rayon::prelude::*;

use crate::simulation::grid::{CellLocation, Grid};
use crate::simulation::simulator::Simulator;
use crate::simulation::states::{Body, BodyView, NVec2};

/// Radius given to generated bodies; the mesh solver never reads it
pub const NOMINAL_RADIUS: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct MeshSimulator {
    bodies: Vec<Body>,
    locations: Vec<CellLocation>, // recomputed at the start of every step
    grid: Grid,
}

impl MeshSimulator {
    /// Grid of `width x height` points spaced `cell_size` apart, filled with
    /// `body_count` random bodies drawn from `rng`
    pub fn new<R: Rng + ?Sized>(
        cell_size: u32,
        width: usize,
        height: usize,
        body_count: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let grid = Grid::new(cell_size as f64, width, height)?;
        let bodies = generate_bodies(&grid, body_count, rng);
        Self::with_bodies(grid, bodies)
    }

    /// Build from an explicit body list
    pub fn with_bodies(grid: Grid, bodies: Vec<Body>) -> Result<Self> {
        for (i, b) in bodies.iter().enumerate() {
            ensure!(b.m.is_finite() && b.m > 0.0, "body {i}: mass must be positive, got {}", b.m);
        }
        log::debug!(
            "mesh simulator with {} bodies on a {}x{} grid (cell size {})",
            bodies.len(),
            grid.width(),
            grid.height(),
            grid.cell_size()
        );

        let locations = vec![CellLocation::default(); bodies.len()];
        Ok(Self {
            bodies,
            locations,
            grid,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell of every body as of the last step
    pub fn locations(&self) -> &[CellLocation] {
        &self.locations
    }

    fn localize(&mut self) {
        let grid = &self.grid;
        for (b, loc) in self.bodies.iter_mut().zip(self.locations.iter_mut()) {
            *loc = grid.locate(b);
        }
    }

    /// Returns how many bodies lost corners past the edge of the lattice
    fn deposit_mass(&mut self) -> usize {
        self.grid.clear();

        let mut clipped = 0;
        for (b, loc) in self.bodies.iter().zip(self.locations.iter()) {
            if !self.grid.deposit(b.m, loc) {
                clipped += 1;
            }
        }
        clipped
    }

    fn kick(&mut self, dt: f64) {
        let grid = &self.grid;
        self.bodies
            .par_iter_mut()
            .zip(self.locations.par_iter())
            .for_each(|(b, loc)| {
                b.v += grid.interpolate(loc) * dt;
            });
    }
}

impl Simulator for MeshSimulator {
    /// locate -> deposit -> solve -> interpolate + kick -> drift.
    /// Each phase finishes before the next one reads its output.
    fn step(&mut self, dt: f64) {
        self.localize();
        let clipped = self.deposit_mass();
        self.grid.solve_field();
        self.kick(dt);

        for b in self.bodies.iter_mut() {
            b.x += b.v * dt;
        }

        log::trace!("mesh step dt={dt}: {clipped} of {} bodies with a clipped stencil", self.bodies.len());
    }

    fn bodies(&self) -> Vec<BodyView> {
        self.bodies.iter().map(Body::view).collect()
    }

    fn len(&self) -> usize {
        self.bodies.len()
    }
}

/// Random bodies inside `grid`'s extent: velocity components in [-3, 3),
/// mass in [1, 3), nominal radius
pub fn generate_bodies<R: Rng + ?Sized>(grid: &Grid, count: usize, rng: &mut R) -> Vec<Body> {
    let extent = grid.extent();

    (0..count)
        .map(|_| {
            let x = NVec2::new(rng.gen_range(0.0..extent.x), rng.gen_range(0.0..extent.y));
            let v = NVec2::new(rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0));
            let m = rng.gen_range(1.0..3.0);
            Body::new(x, v, m, NOMINAL_RADIUS)
        })
        .collect()
}
