use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::simulation::direct::DirectSimulator;
use crate::simulation::grid::Grid;
use crate::simulation::mesh::{generate_bodies, MeshSimulator};
use crate::simulation::simulator::Simulator;

/// Grid used for every mesh measurement: 21x21 points, 20 units apart
const CELL_SIZE: f64 = 20.0;
const GRID_POINTS: usize = 21;

/// Average wall-clock milliseconds of one `step(dt)`
fn time_steps(sim: &mut dyn Simulator, dt: f64, steps: usize) -> f64 {
    // Warm up
    sim.step(dt);

    let t0 = Instant::now();
    for _ in 0..steps {
        sim.step(dt);
    }
    t0.elapsed().as_secs_f64() * 1000.0 / steps as f64
}

/// Time one step of the direct and the mesh simulator on the same random bodies
/// for growing N. Paste output directly into a spreadsheet to graph.
pub fn bench_simulators() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let grid = Grid::new(CELL_SIZE, GRID_POINTS, GRID_POINTS)?;

    println!("N,direct_ms,mesh_ms");

    for n in [250, 500, 1000, 2000, 4000, 8000, 16000] {
        let bodies = generate_bodies(&grid, n, &mut rng);

        // Large n: only 1 step of the O(n^2) integrator to avoid minutes of runtime
        let steps_direct = if n <= 2000 { 5 } else { 1 };

        let mut direct = DirectSimulator::new(bodies.clone())?;
        let ms_direct = time_steps(&mut direct, 0.01, steps_direct);

        let mut mesh = MeshSimulator::with_bodies(grid.clone(), bodies)?;
        let ms_mesh = time_steps(&mut mesh, 0.01, 5);

        println!("{},{:.6},{:.6}", n, ms_direct, ms_mesh);
    }

    Ok(())
}
