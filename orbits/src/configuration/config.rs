//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – which simulator drives the run
//! - [`ParametersConfig`] – step size, run length and random seed
//! - [`DirectConfig`]     – body catalog and/or explicit bodies (direct simulator)
//! - [`MeshConfig`]       – grid geometry and body count (mesh simulator)
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A direct scenario:
//!
//! ```yaml
//! engine:
//!   simulator: "direct"     # or "mesh"
//!
//! parameters:
//!   dt: 3600.0              # seconds per step
//!   steps_per_tick: 24      # steps per host tick
//!   ticks: 3650             # host ticks to run
//!   report_every: 365       # optional, defaults to 60
//!   seed: 42
//!
//! direct:
//!   catalog: "sol"          # optional, or "sun_test"
//!   bodies:                 # optional, appended after the catalog
//!     - name: "COMET"
//!       x: [ 3.0e11, 0.0 ]
//!       v: [ 0.0, 1.0e4 ]
//!       m: 1.0e14
//!       radius: 5.0e3
//! ```
//!
//! A mesh scenario replaces `direct` with:
//!
//! ```yaml
//! mesh:
//!   cell_size: 20
//!   width: 21
//!   height: 21
//!   body_count: 100000
//! ```

use serde::Deserialize;

/// Which simulator the engine runs
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorConfig {
    #[serde(rename = "direct")] // Pairwise O(n^2) gravity, SI units
    Direct,

    #[serde(rename = "mesh")] // Particle-mesh gravity on a fixed grid, normalized units
    Mesh,
}

#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub simulator: SimulatorConfig,
}

/// Global numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,                   // time step size
    pub steps_per_tick: u32,       // steps per host tick
    pub ticks: u64,                // host ticks to run
    pub report_every: Option<u64>, // ticks between reports
    pub seed: u64,                 // deterministic seed to make runs reproducible
}

/// Named body catalogs shipped with the engine
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogConfig {
    #[serde(rename = "sol")]
    Sol,

    #[serde(rename = "sun_test")]
    SunTest,
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: Option<String>,
    pub x: Vec<f64>, // Initial position in meters
    pub v: Vec<f64>, // Initial velocity in m/s
    pub m: f64,      // Mass in kg
    pub radius: f64, // Collision radius in meters
}

#[derive(Deserialize, Debug)]
pub struct DirectConfig {
    pub catalog: Option<CatalogConfig>,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MeshConfig {
    pub cell_size: u32,  // spacing between grid points
    pub width: u32,      // grid points along x
    pub height: u32,     // grid points along y
    pub body_count: u32, // bodies generated uniformly inside the grid
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub direct: Option<DirectConfig>,
    pub mesh: Option<MeshConfig>,
}
