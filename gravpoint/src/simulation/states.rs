//! Core state types for the gravity point simulation.
//!
//! Defines the two kinds of bodies:
//! - `Particle`     the free moving point mass the player launches
//! - `GravityPoint` a body pulling on particles and on other points
//!
//! plus the `Role` dispatch table that decides how a point behaves.
//! The per-frame algorithms live in `forces` (points) and `integrator`
//! (particles).

use crate::simulation::params::Parameters;
use crate::simulation::vector::{NVec2, VectorOps};

#[derive(Debug, Clone)]
pub struct Particle {
    pub position: NVec2, // current position
    pub radius: f64, // rendering only, trail width is 2 * radius
    pub speed: NVec2, // accumulated displacement per frame, never reset by the loop
    pub previous_position: NVec2, // position before the last advance
}

impl Particle {
    pub fn new(position: NVec2, radius: f64) -> Self {
        Self {
            position,
            radius,
            speed: NVec2::zeros(),
            previous_position: position,
        }
    }

    /// Add `delta` to the speed. Forces only count once the game is started
    pub fn accumulate_force(&mut self, delta: &NVec2, started: bool) {
        if started {
            self.speed.add_assign_v(delta);
        }
    }

    pub fn reset_speed(&mut self) {
        self.speed = NVec2::zeros();
    }
}

/// What kind of body a gravity point is.
///
/// Every role-specific rule goes through the methods below instead of
/// per-point boolean flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Normal, // draggable, gravity grows with radius
    Finish, // the goal, reaching it wins
    Asteroid, // inert obstacle
    Sun, // fixed strong gravity
}

impl Role {
    /// Starting gravity for a point of this role and radius
    pub fn base_gravity(self, radius: f64, params: &Parameters) -> f64 {
        match self {
            Role::Normal => radius * radius * params.gravity_coefficient,
            Role::Finish | Role::Asteroid => 0.0,
            Role::Sun => params.sun_gravity,
        }
    }

    pub fn draggable(self) -> bool {
        matches!(self, Role::Normal)
    }

    pub fn is_finish(self) -> bool {
        matches!(self, Role::Finish)
    }

    /// Level fixtures keep their size. Only normal points collapse when
    /// they grow past the radius limit
    pub fn collapses_when_oversized(self) -> bool {
        matches!(self, Role::Normal)
    }
}

/// Which collections a point exerts force on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Targets {
    pub particles: bool,
    pub peers: bool,
}

impl Default for Targets {
    fn default() -> Self {
        Self {
            particles: true,
            peers: true,
        }
    }
}

/// Lifecycle of a point, derived from its flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointState {
    Active,
    Collapsing,
    Destroyed,
}

#[derive(Debug, Clone)]
pub struct GravityPoint {
    pub id: usize, // stable id, survives compaction of the point list
    pub position: NVec2,
    pub target_radius: f64, // "true" size, what the eased radius trends to
    pub current_radius: f64, // eased display radius
    pub ease_velocity: f64, // spring state of the radius easing
    pub gravity: f64, // force strength
    pub speed_accumulator: NVec2, // forces collected this frame, reset every step
    pub role: Role,
    pub targets: Targets,
    pub destroyed: bool,
    pub collapsing: bool,
    pub dragging: bool,
}

impl GravityPoint {
    pub fn new(id: usize, position: NVec2, radius: f64, role: Role, params: &Parameters) -> Self {
        Self {
            id,
            position,
            target_radius: radius,
            current_radius: radius * params.initial_radius_fraction,
            ease_velocity: 0.0,
            gravity: role.base_gravity(radius, params),
            speed_accumulator: NVec2::zeros(),
            role,
            targets: Targets::default(),
            destroyed: false,
            collapsing: false,
            dragging: false,
        }
    }

    pub fn with_targets(mut self, targets: Targets) -> Self {
        self.targets = targets;
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn state(&self) -> PointState {
        if self.destroyed {
            PointState::Destroyed
        } else if self.collapsing {
            PointState::Collapsing
        } else {
            PointState::Active
        }
    }

    pub fn add_speed(&mut self, delta: &NVec2) {
        self.speed_accumulator.add_assign_v(delta);
    }

    /// Whether `pointer` lies inside the point
    pub fn hit_test(&self, pointer: &NVec2) -> bool {
        self.position.distance_to(pointer) < self.target_radius
    }

    pub fn start_drag(&mut self) {
        if self.role.draggable() && !self.destroyed {
            self.dragging = true;
        }
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Move the point onto `pointer` if the pointer is still inside it.
    /// Returns whether the point moved
    pub fn drag(&mut self, pointer: &NVec2) -> bool {
        if !self.role.draggable() || !self.hit_test(pointer) {
            return false;
        }
        self.position = *pointer;
        true
    }

    /// Enter the terminal shrink phase. Picked up by the next step
    pub fn collapse(&mut self) {
        if !self.destroyed {
            self.collapsing = true;
        }
    }
}
