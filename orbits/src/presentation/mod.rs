//! Helpers for whoever draws the simulation.
//!
//! Nothing in here feeds back into the physics; it only maps `Simulator::bodies`
//! output (and catalog names) onto screen sizes, colors and readable times.

pub mod scaling;
pub mod palette;
pub mod clock;
