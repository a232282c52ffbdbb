//! Build a playable scenario from configuration and run it frame by frame
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - gameplay state (`Engine`)
//! - simulation constants (`Parameters`)
//! - the gravity point arena and the particle set
//!
//! `Scenario::step_frame` is the frame loop. The scenario is inserted into
//! Bevy as a `Resource` and driven by the viewer or the headless runner

use bevy::log::info;
use bevy::prelude::Resource;

use crate::configuration::config::{ParametersConfig, PointConfig, ScenarioConfig};
use crate::simulation::collision::{check_collision, Outcome};
use crate::simulation::engine::{Engine, GamePhase};
use crate::simulation::forces::{step_point, PointEvent};
use crate::simulation::integrator::advance_particle;
use crate::simulation::params::Parameters;
use crate::simulation::states::{GravityPoint, Particle, Role, Targets};
use crate::simulation::vector::NVec2;
use crate::visualization::draw::{DrawSink, PointDraw, TrailDraw};

/// What happened during one frame
#[derive(Debug, Clone, Default)]
pub struct FrameReport {
    pub frame: u64,
    pub spawned: bool, // a particle was emitted at the start of the frame
    pub events: Vec<PointEvent>,
    pub outcome: Option<Outcome>,
}

impl FrameReport {
    pub fn absorptions(&self) -> usize {
        self.events.iter().filter(|e| matches!(e, PointEvent::Absorbed { .. })).count()
    }
}

/// Bevy resource holding a running level
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub points: Vec<GravityPoint>,
    pub particles: Vec<Particle>,
    pub emission: NVec2, // where particles spawn
    pub particle_radius: f64,
    pub screen: NVec2, // width, height
    next_id: usize,
}

impl Scenario {
    pub fn new(parameters: Parameters, emission: NVec2, particle_radius: f64, screen: NVec2) -> Self {
        Self {
            engine: Engine::default(),
            parameters,
            points: Vec::new(),
            particles: Vec::new(),
            emission,
            particle_radius,
            screen,
            next_id: 0,
        }
    }

    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let screen = NVec2::new(cfg.screen.width, cfg.screen.height);
        let parameters = build_parameters(&cfg.parameters);
        let emission = NVec2::new(cfg.particle.emission[0] * screen.x, cfg.particle.emission[1] * screen.y);

        let mut scenario = Self::new(parameters, emission, cfg.particle.radius, screen);
        for pc in &cfg.points {
            scenario.add_point_from_config(pc);
        }
        scenario.spawn_particle();

        info!(
            "scenario built: {} points, emission at ({:.1}, {:.1})",
            scenario.points.len(),
            scenario.emission.x,
            scenario.emission.y
        );
        scenario
    }

    fn add_point_from_config(&mut self, pc: &PointConfig) -> usize {
        let position = NVec2::new(pc.x * self.screen.x, pc.y * self.screen.y);
        let targets = Targets {
            particles: pc.particles,
            peers: pc.peers,
        };
        let point = self.add_point(position, pc.radius, pc.role.into());
        point.targets = targets;
        if let Some(g) = pc.gravity {
            point.gravity = g;
        }
        point.id
    }

    /// Append a point with the role's default gravity and a fresh id
    pub fn add_point(&mut self, position: NVec2, radius: f64, role: Role) -> &mut GravityPoint {
        let point = GravityPoint::new(self.next_id, position, radius, role, &self.parameters);
        self.next_id += 1;
        self.points.push(point);
        let last = self.points.len() - 1;
        &mut self.points[last]
    }

    pub fn point(&self, id: usize) -> Option<&GravityPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn spawn_particle(&mut self) {
        self.particles.push(Particle::new(self.emission, self.particle_radius));
    }

    fn drag_allowed(&self) -> bool {
        !(self.parameters.lock_drag_while_running && self.engine.started())
    }

    /// Launch the most recent particle. Does nothing while already started
    pub fn start(&mut self) -> bool {
        if self.engine.phase != GamePhase::Aiming {
            return false;
        }
        if self.particles.is_empty() {
            self.spawn_particle();
        }
        self.engine.phase = GamePhase::Running;
        let kick = self.parameters.launch_impulse;
        if let Some(p) = self.particles.last_mut() {
            p.accumulate_force(&kick, true);
        }
        info!("launched at frame {}", self.engine.frame);
        true
    }

    /// Back to aiming, the active particle is removed and respawned next frame
    pub fn reset(&mut self) {
        self.engine.phase = GamePhase::Aiming;
        self.particles.pop();
        info!("reset at frame {}", self.engine.frame);
    }

    /// Pointer pressed: every draggable point under it starts dragging
    pub fn press(&mut self, pointer: NVec2) {
        self.engine.pointer = Some(pointer);
        if !self.drag_allowed() {
            return;
        }
        for p in self.points.iter_mut().filter(|p| p.hit_test(&pointer)) {
            p.start_drag();
        }
    }

    pub fn move_pointer(&mut self, pointer: NVec2) {
        self.engine.pointer = Some(pointer);
    }

    pub fn release(&mut self) {
        for p in self.points.iter_mut() {
            p.end_drag();
        }
    }

    /// Collapse the topmost point under the pointer, returns its id
    pub fn collapse_at(&mut self, pointer: NVec2) -> Option<usize> {
        let p = self.points.iter_mut().rev().find(|p| p.hit_test(&pointer))?;
        p.collapse();
        Some(p.id)
    }

    /// Run one frame of the game
    pub fn step_frame(&mut self) -> FrameReport {
        let mut report = FrameReport {
            frame: self.engine.frame,
            ..Default::default()
        };
        if self.engine.finished() {
            return report;
        }
        self.engine.frame += 1;

        if self.particles.is_empty() {
            self.spawn_particle();
            report.spawned = true;
        }

        // Gravity points, in list order. Destructions are only marked here so
        // the indices stay valid for the whole pass
        let started = self.engine.started();
        let drag_allowed = self.drag_allowed();
        for i in 0..self.points.len() {
            if self.points[i].dragging && drag_allowed {
                if let Some(pointer) = self.engine.pointer {
                    self.points[i].drag(&pointer);
                }
            }
            step_point(&mut self.points, i, &mut self.particles, &self.parameters, started, &mut report.events);
        }
        self.points.retain(|p| !p.destroyed);

        // Particles, then arrival checks against what is left
        let mut hit: Option<(usize, Outcome)> = None;
        for (k, p) in self.particles.iter_mut().enumerate() {
            advance_particle(p, &self.parameters);
            if hit.is_none() {
                hit = check_collision(p, &self.points, &self.parameters).map(|o| (k, o));
            }
        }

        if let Some((k, outcome)) = hit {
            match outcome {
                Outcome::Won => {
                    self.engine.phase = GamePhase::Won;
                    info!("finish reached at frame {}", self.engine.frame);
                }
                Outcome::Reset => {
                    self.engine.phase = GamePhase::Aiming;
                    self.particles.remove(k);
                    info!("particle lost at frame {}, resetting", self.engine.frame);
                }
            }
            report.outcome = Some(outcome);
        }

        report
    }

    /// Hand the current frame to a renderer
    pub fn draw<S: DrawSink>(&self, sink: &mut S) {
        for p in self.points.iter().filter(|p| !p.destroyed) {
            sink.draw_point(&PointDraw::from_point(p));
        }
        for p in &self.particles {
            sink.draw_trail(&TrailDraw::from_particle(p));
        }
    }
}

/// Parameters (runtime) from ParametersConfig
pub fn build_parameters(cfg: &ParametersConfig) -> Parameters {
    let d = Parameters::default();
    Parameters {
        speed_cap: cfg.speed_cap.unwrap_or(d.speed_cap),
        radius_limit: cfg.radius_limit.unwrap_or(d.radius_limit),
        gravity_coefficient: cfg.gravity_coefficient.unwrap_or(d.gravity_coefficient),
        sun_gravity: cfg.sun_gravity.unwrap_or(d.sun_gravity),
        interference_to_point: cfg.interference_to_point.unwrap_or(d.interference_to_point),
        launch_impulse: cfg.launch_impulse.map(|[x, y]| NVec2::new(x, y)).unwrap_or(d.launch_impulse),
        reset_above_top: cfg.reset_above_top.unwrap_or(d.reset_above_top),
        lock_drag_while_running: cfg.lock_drag_while_running.unwrap_or(d.lock_drag_while_running),
        ..d
    }
}
