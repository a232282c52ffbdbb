//! Configuration types for loading levels from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! level. A level consists of:
//!
//! - [`ScreenConfig`]     – size of the playing field in pixels
//! - [`ParticleConfig`]   – particle radius and emission point
//! - [`ParametersConfig`] – optional overrides of the simulation constants
//! - [`PointConfig`]      – initial state of each gravity point
//! - [`ScenarioConfig`]   – top-level wrapper used to load a level from YAML
//!
//! Positions are fractions of the screen size, so a level keeps its layout
//! on any window. `y` grows downwards like screen coordinates.
//!
//! # YAML format
//!
//! ```yaml
//! screen:
//!   width: 1280.0
//!   height: 720.0
//!
//! particle:
//!   radius: 10.0
//!   emission: [0.5, 0.9]     # fractions of width / height
//!
//! parameters:                # every field is optional
//!   speed_cap: 12.0
//!   radius_limit: 65.0
//!   interference_to_point: false
//!   launch_impulse: [0.5, -0.5]
//!
//! points:
//!   - { x: 0.5, y: 0.0, radius: 50.0, role: finish }
//!   - { x: 0.5, y: 0.3, radius: 20.0 }
//!   - { x: 0.25, y: 0.3, radius: 40.0, peers: false }
//! ```
//!
//! The scenario builder maps this into the runtime `Scenario`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use crate::simulation::states::Role;

/// Role of a gravity point
/// `role: "normal"`, `"finish"`, `"asteroid"` or `"sun"`
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoleConfig {
    #[default]
    Normal,
    Finish,
    Asteroid,
    Sun,
}

impl From<RoleConfig> for Role {
    fn from(r: RoleConfig) -> Self {
        match r {
            RoleConfig::Normal => Role::Normal,
            RoleConfig::Finish => Role::Finish,
            RoleConfig::Asteroid => Role::Asteroid,
            RoleConfig::Sun => Role::Sun,
        }
    }
}

/// Size of the playing field
#[derive(Deserialize, Debug, Clone)]
pub struct ScreenConfig {
    pub width: f64, // pixels
    pub height: f64, // pixels
}

/// The particle the player launches
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParticleConfig {
    pub radius: f64, // trail is drawn 2 * radius wide
    pub emission: [f64; 2], // spawn point as fractions of the screen
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            emission: [0.5, 0.9],
        }
    }
}

/// Overrides for the simulation constants, `None` keeps the default
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ParametersConfig {
    pub speed_cap: Option<f64>,
    pub radius_limit: Option<f64>,
    pub gravity_coefficient: Option<f64>,
    pub sun_gravity: Option<f64>,
    pub interference_to_point: Option<bool>,
    pub launch_impulse: Option<[f64; 2]>,
    pub reset_above_top: Option<bool>,
    pub lock_drag_while_running: Option<bool>,
}

fn enabled() -> bool {
    true
}

/// Initial state of one gravity point
#[derive(Deserialize, Debug, Clone)]
pub struct PointConfig {
    pub x: f64, // fraction of screen width
    pub y: f64, // fraction of screen height
    pub radius: f64, // target radius in pixels
    #[serde(default)]
    pub role: RoleConfig,
    pub gravity: Option<f64>, // overrides the role's gravity
    #[serde(default = "enabled")]
    pub particles: bool, // pulls on the particle
    #[serde(default = "enabled")]
    pub peers: bool, // pulls on / absorbs other points
}

/// Top-level level configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub screen: ScreenConfig,
    #[serde(default)]
    pub particle: ParticleConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub points: Vec<PointConfig>,
}

impl ScenarioConfig {
    /// Parse and validate a level
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader).context("invalid level YAML")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("cannot open level {}", path.display()))?;
        Self::from_reader(BufReader::new(file)).with_context(|| format!("in level {}", path.display()))
    }

    /// Reject levels the simulation cannot run sensibly
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.screen.width > 0.0 && self.screen.height > 0.0,
            "screen must have a positive size, got {}x{}",
            self.screen.width,
            self.screen.height
        );
        ensure!(self.particle.radius > 0.0, "particle radius must be positive");
        for (i, p) in self.points.iter().enumerate() {
            ensure!(p.radius > 0.0, "point {i}: radius must be positive, got {}", p.radius);
            ensure!(p.radius.is_finite() && p.x.is_finite() && p.y.is_finite(), "point {i}: non-finite geometry");
            if let Some(g) = p.gravity {
                ensure!(g.is_finite() && g >= 0.0, "point {i}: gravity must be finite and non-negative");
            }
        }
        ensure!(
            self.points.iter().any(|p| p.role == RoleConfig::Finish),
            "level needs a finish point"
        );
        if let Some(cap) = self.parameters.speed_cap {
            ensure!(cap > 0.0, "speed_cap must be positive");
        }
        if let Some(limit) = self.parameters.radius_limit {
            ensure!(limit > 0.0, "radius_limit must be positive");
        }
        Ok(())
    }
}
