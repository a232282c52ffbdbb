//! Renderer-independent draw parameters
//!
//! The simulation never talks to a renderer. Each frame it hands a
//! [`DrawSink`] one [`PointDraw`] per live gravity point and one
//! [`TrailDraw`] per particle

use crate::simulation::states::{GravityPoint, Particle, Role};
use crate::simulation::vector::NVec2;

/// Straight RGBA colour, components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub fn from_u8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a,
        }
    }
}

/// Two-stop radial gradient, core to rim
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub inner: Rgba,
    pub outer: Rgba,
}

impl Role {
    pub fn gradient(self) -> Gradient {
        let inner = match self {
            Role::Normal => Rgba::from_u8(0, 0, 0, 1.0),
            Role::Finish => Rgba::from_u8(125, 0, 255, 1.0),
            Role::Asteroid => Rgba::from_u8(100, 66, 33, 1.0),
            Role::Sun => Rgba::from_u8(200, 200, 0, 1.0),
        };
        // asteroids and suns fade straight out
        let outer = match self {
            Role::Normal | Role::Finish => Rgba::from_u8(103, 181, 191, 0.75),
            Role::Asteroid | Role::Sun => Rgba { a: 0.0, ..inner },
        };
        Gradient { inner, outer }
    }
}

/// Draw parameters of one gravity point
#[derive(Debug, Clone, PartialEq)]
pub struct PointDraw {
    pub id: usize,
    pub center: NVec2,
    pub radius: f64, // eased radius
    pub halo_radius: f64, // soft shadow around the body
    pub gradient: Gradient,
    pub collapsing: bool,
}

impl PointDraw {
    pub fn from_point(p: &GravityPoint) -> Self {
        Self {
            id: p.id,
            center: p.position,
            radius: p.current_radius,
            halo_radius: p.target_radius * 5.0,
            gradient: p.role.gradient(),
            collapsing: p.collapsing,
        }
    }
}

/// Capsule from the previous to the current particle position
#[derive(Debug, Clone, PartialEq)]
pub struct TrailDraw {
    pub from: NVec2,
    pub to: NVec2,
    pub width: f64,
}

impl TrailDraw {
    pub fn from_particle(p: &Particle) -> Self {
        Self {
            from: p.previous_position,
            to: p.position,
            width: p.radius * 2.0,
        }
    }
}

/// Consumer of a frame's draw calls
pub trait DrawSink {
    fn draw_point(&mut self, point: &PointDraw);
    fn draw_trail(&mut self, trail: &TrailDraw);
}

/// Sink that keeps the calls, for tests and headless runs
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub points: Vec<PointDraw>,
    pub trails: Vec<TrailDraw>,
}

impl DrawSink for RecordingSink {
    fn draw_point(&mut self, point: &PointDraw) {
        self.points.push(point.clone());
    }

    fn draw_trail(&mut self, trail: &TrailDraw) {
        self.trails.push(trail.clone());
    }
}
