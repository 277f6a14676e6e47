//! Numerical parameters for a run
//!
//! `Parameters` holds runtime settings:
//! - step size and how many steps make up one host tick,
//! - how long the headless driver runs and how often it reports,
//! - the seed of the random source used to generate mesh bodies

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size
    pub steps_per_tick: u32, // Step(dt) calls per host tick
    pub ticks: u64, // host ticks to run
    pub report_every: u64, // ticks between reports
    pub seed: u64, // deterministic seed
}
