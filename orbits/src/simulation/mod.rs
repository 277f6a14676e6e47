pub mod states;
pub mod params;
pub mod engine;
pub mod simulator;
pub mod direct;
pub mod grid;
pub mod mesh;
pub mod catalog;
pub mod scenario;
