//! Direct pairwise N-body gravity
//!
//! Every body feels every other body (O(n^2) per step) with the physical
//! gravitational constant, positions in meters and velocities in m/s.
//! Close encounters are handled by clamping the separation to the sum of
//! the two radii rather than by softening.

use anyhow::{ensure, Result};

use crate::simulation::simulator::Simulator;
use crate::simulation::states::{Body, BodyView, NVec2};

/// Newtonian gravitational constant in m^3 kg^-1 s^-2
pub const G: f64 = 6.67430e-11;

#[derive(Debug, Clone)]
pub struct DirectSimulator {
    bodies: Vec<Body>,
    dv: Vec<NVec2>, // per-step velocity change, reused between steps
}

impl DirectSimulator {
    /// Build a simulator owning `bodies`. Masses must be positive and finite,
    /// radii non-negative.
    pub fn new(bodies: Vec<Body>) -> Result<Self> {
        for (i, b) in bodies.iter().enumerate() {
            ensure!(b.m.is_finite() && b.m > 0.0, "body {i}: mass must be positive, got {}", b.m);
            ensure!(b.radius.is_finite() && b.radius >= 0.0, "body {i}: radius must be non-negative, got {}", b.radius);
            ensure!(
                b.x.iter().chain(b.v.iter()).all(|c| c.is_finite()),
                "body {i}: position and velocity must be finite"
            );
        }
        log::debug!("direct simulator with {} bodies", bodies.len());

        let n = bodies.len();
        Ok(Self {
            bodies,
            dv: vec![NVec2::zeros(); n],
        })
    }

    /// Magnitude of the acceleration `target` feels from `source`, G * m_source / d^2
    /// with `d` clamped to the sum of radii
    pub fn acceleration_magnitude(target: &Body, source: &Body) -> f64 {
        let d = target.distance_to(source);
        G * source.m / (d * d)
    }

    fn accumulate_velocity_changes(&mut self, dt: f64) {
        let bodies = &self.bodies;

        for (i, bi) in bodies.iter().enumerate() {
            let mut dv = NVec2::zeros();

            for (j, bj) in bodies.iter().enumerate() {
                if i == j {
                    continue;
                }

                // d is never below r_i + r_j; only two point masses sitting
                // on top of each other can give zero here
                let d = bi.distance_to(bj);
                if d == 0.0 {
                    continue;
                }

                // |a| = G m_j / d^2 along the unit vector from i to j.
                // The direction uses the clamped distance, so overlapping bodies
                // get a shortened (never infinite) pull.
                let magnitude = Self::acceleration_magnitude(bi, bj);
                let direction = (bj.x - bi.x) / d;

                dv += magnitude * direction * dt;
            }

            self.dv[i] = dv;
        }
    }
}

impl Simulator for DirectSimulator {
    /// Semi-implicit Euler: kick every body with the accelerations of the
    /// current positions, then drift every body with its new velocity
    fn step(&mut self, dt: f64) {
        if self.bodies.is_empty() {
            return;
        }

        self.accumulate_velocity_changes(dt);

        // Kick: v_n+1 = v_n + a_n dt (dt already folded into dv)
        for (b, dv) in self.bodies.iter_mut().zip(self.dv.iter()) {
            b.v += *dv;
        }

        // Drift: x_n+1 = x_n + v_n+1 dt
        for b in self.bodies.iter_mut() {
            b.x += b.v * dt;
        }
    }

    fn bodies(&self) -> Vec<BodyView> {
        self.bodies.iter().map(Body::view).collect()
    }

    fn len(&self) -> usize {
        self.bodies.len()
    }
}
