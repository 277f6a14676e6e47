//! The contract both integrators satisfy.
//!
//! A renderer only ever talks to a `Box<dyn Simulator>`: it calls
//! [`Simulator::step`] once or more per frame and then reads
//! [`Simulator::bodies`] to draw.

use crate::simulation::states::BodyView;

pub trait Simulator {
    /// Advance every owned body by `dt` (in the simulator's own units).
    /// `dt` must be positive.
    fn step(&mut self, dt: f64);

    /// Snapshot of all bodies in insertion order
    fn bodies(&self) -> Vec<BodyView>;

    /// Number of owned bodies, fixed for the lifetime of the simulator
    fn len(&self) -> usize {
        self.bodies().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
