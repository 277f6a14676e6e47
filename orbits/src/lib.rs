pub mod simulation;
pub mod configuration;
pub mod presentation;
pub mod benchmark;

pub use simulation::states::{Body, BodyView, NVec2};
pub use simulation::simulator::Simulator;
pub use simulation::direct::DirectSimulator;
pub use simulation::grid::{CellLocation, Grid};
pub use simulation::mesh::MeshSimulator;
pub use simulation::catalog::NamedBody;
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, DirectConfig, MeshConfig, ScenarioConfig, SimulatorConfig, CatalogConfig};

pub use benchmark::benchmark::bench_simulators;
