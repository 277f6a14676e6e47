//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the simulator itself, behind the `Simulator` trait
//! - the display names of catalog bodies, in body order
//!
//! All validation happens here; a built scenario can be stepped forever.

use anyhow::{bail, ensure, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::{BodyConfig, CatalogConfig, ScenarioConfig, SimulatorConfig};
use crate::simulation::catalog::{self, NamedBody};
use crate::simulation::direct::DirectSimulator;
use crate::simulation::engine::Engine;
use crate::simulation::mesh::MeshSimulator;
use crate::simulation::params::Parameters;
use crate::simulation::simulator::Simulator;
use crate::simulation::states::{Body, NVec2};

const DEFAULT_REPORT_EVERY: u64 = 60;

pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub simulator: Box<dyn Simulator + Send + Sync>,
    pub names: Vec<Option<String>>, // per body, empty for generated bodies
    pub t: f64, // simulated time elapsed
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        ensure!(p_cfg.dt.is_finite() && p_cfg.dt > 0.0, "dt must be positive, got {}", p_cfg.dt);
        ensure!(p_cfg.steps_per_tick > 0, "steps_per_tick must be at least 1");
        let parameters = Parameters {
            dt: p_cfg.dt,
            steps_per_tick: p_cfg.steps_per_tick,
            ticks: p_cfg.ticks,
            report_every: p_cfg.report_every.unwrap_or(DEFAULT_REPORT_EVERY).max(1),
            seed: p_cfg.seed,
        };

        let engine = Engine {
            simulator: cfg.engine.simulator,
        };

        let (simulator, names): (Box<dyn Simulator + Send + Sync>, Vec<Option<String>>) = match engine.simulator {
            SimulatorConfig::Direct => {
                let d_cfg = cfg.direct.context("direct simulator selected but no `direct` section given")?;

                let mut named = match d_cfg.catalog {
                    Some(CatalogConfig::Sol) => catalog::sol(),
                    Some(CatalogConfig::SunTest) => catalog::sun_test(),
                    None => Vec::new(),
                };
                for (i, bc) in d_cfg.bodies.iter().enumerate() {
                    named.push(body_from_config(bc).with_context(|| format!("invalid body #{i}"))?);
                }
                ensure!(!named.is_empty(), "direct scenario has no bodies");

                let names = named.iter().map(|nb| (!nb.name.is_empty()).then(|| nb.name.clone())).collect();
                let bodies = named.into_iter().map(|nb| nb.body).collect();
                let sim: Box<dyn Simulator + Send + Sync> = Box::new(DirectSimulator::new(bodies)?);
                (sim, names)
            }
            SimulatorConfig::Mesh => {
                let m_cfg = cfg.mesh.context("mesh simulator selected but no `mesh` section given")?;

                let mut rng = StdRng::seed_from_u64(parameters.seed);
                let sim = MeshSimulator::new(
                    m_cfg.cell_size,
                    m_cfg.width as usize,
                    m_cfg.height as usize,
                    m_cfg.body_count as usize,
                    &mut rng,
                )
                .context("invalid mesh configuration")?;

                let sim: Box<dyn Simulator + Send + Sync> = Box::new(sim);
                (sim, vec![None; m_cfg.body_count as usize])
            }
        };

        Ok(Self {
            engine,
            parameters,
            simulator,
            names,
            t: 0.0,
        })
    }

    /// One host tick: `steps_per_tick` steps of `dt`
    pub fn tick(&mut self) {
        let dt = self.parameters.dt;
        for _ in 0..self.parameters.steps_per_tick {
            self.simulator.step(dt);
        }
        self.t += dt * self.parameters.steps_per_tick as f64;
    }
}

fn body_from_config(bc: &BodyConfig) -> Result<NamedBody> {
    let (x, v) = match (bc.x.as_slice(), bc.v.as_slice()) {
        (&[x0, x1], &[v0, v1]) => (NVec2::new(x0, x1), NVec2::new(v0, v1)),
        _ => bail!("position and velocity need exactly 2 components, got {} and {}", bc.x.len(), bc.v.len()),
    };

    Ok(NamedBody {
        name: bc.name.clone().unwrap_or_default(),
        body: Body::new(x, v, bc.m, bc.radius),
    })
}
