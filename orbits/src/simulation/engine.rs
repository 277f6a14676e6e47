//! High-level runtime engine settings
//!
//! Selects which simulator a `Scenario` is built around

use crate::configuration::config::SimulatorConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub simulator: SimulatorConfig, // direct or mesh
}

impl Engine {
    /// Physical (SI) units with real G, as opposed to the normalized mesh units
    pub fn uses_si_units(&self) -> bool {
        self.simulator == SimulatorConfig::Direct
    }
}
