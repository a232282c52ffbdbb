pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::vector::{NVec2, VectorOps};
pub use simulation::states::{Particle, GravityPoint, Role, Targets, PointState};
pub use simulation::params::Parameters;
pub use simulation::engine::{Engine, GamePhase};
pub use simulation::forces::{step_point, PointEvent};
pub use simulation::integrator::advance_particle;
pub use simulation::collision::{check_collision, Outcome};
pub use simulation::scenario::{Scenario, FrameReport};

pub use configuration::config::{ScenarioConfig, ParametersConfig, PointConfig, RoleConfig};

pub use visualization::draw::{DrawSink, PointDraw, TrailDraw, RecordingSink};
pub use visualization::{viewer2d::run_2d, headless::run_headless};

pub use benchmark::benchmark::bench_frames;
