use std::time::Instant;

use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::Role;
use crate::simulation::vector::NVec2;

/// Lay out `n` points on a deterministic lattice with jitter, no rand needed.
/// Neighbours overlap enough that absorption cascades start right away
fn lattice_scenario(n: usize) -> Scenario {
    let cols = (n as f64).sqrt().ceil() as usize;
    let spacing = 18.0;
    let size = cols as f64 * spacing + 100.0;

    let mut scenario = Scenario::new(Parameters::default(), NVec2::new(size * 0.5, size - 10.0), 10.0, NVec2::new(size, size));
    scenario.add_point(NVec2::new(size * 0.5, 0.0), 50.0, Role::Finish);

    for i in 0..n {
        let i_f = i as f64;
        let x = 50.0 + (i % cols) as f64 * spacing + (i_f * 0.37).sin() * 3.0;
        let y = 50.0 + (i / cols) as f64 * spacing + (i_f * 0.13).cos() * 3.0;
        let radius = 8.0 + (i_f * 0.07).sin().abs() * 6.0;
        scenario.add_point(NVec2::new(x, y), radius, Role::Normal);
    }
    scenario.spawn_particle();
    scenario.start();
    scenario
}

/// Time `frames` frames of `step_frame` for growing point counts
pub fn bench_frames() {
    let ns = [50, 100, 200, 400, 800, 1600];
    let frames = 200;

    for n in ns {
        let mut scenario = lattice_scenario(n);

        let t0 = Instant::now();
        let mut absorptions = 0;
        for _ in 0..frames {
            absorptions += scenario.step_frame().absorptions();
        }
        let dt = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, {frames} frames = {:8.6} s ({:8.3} us/frame), absorptions = {absorptions:5}, left = {:5}",
            dt,
            dt / frames as f64 * 1e6,
            scenario.points.len()
        );
    }
}
