//! Numerical tuning for the simulation
//!
//! `Parameters` holds the runtime constants:
//! - particle speed cap and launch impulse,
//! - radius easing spring, absorption reach and collapse rules,
//! - gravity scaling per role,
//! - gameplay switches (point drift, top boundary, drag lock)

use crate::simulation::vector::NVec2;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub speed_cap: f64, // max particle displacement per frame
    pub radius_limit: f64, // eased radius above this starts a collapse
    pub gravity_coefficient: f64, // gravity = radius^2 * coefficient for normal points
    pub sun_gravity: f64, // fixed gravity of a sun
    pub initial_radius_fraction: f64, // eased radius starts at radius * fraction
    pub ease_stiffness: f64, // spring pull toward the target radius
    pub ease_damping: f64, // spring velocity damping
    pub absorb_reach: f64, // overlap factor for absorption
    pub absorb_impulse: f64, // kick toward the absorbed point
    pub gulp_factor: f64, // absorbed area multiplier of the overshoot radius
    pub collapse_shrink: f64, // target radius factor per collapsing frame
    pub collapse_floor: f64, // collapsing point dies below this eased radius
    pub interference_to_point: bool, // points drift from peer forces
    pub launch_impulse: NVec2, // kick given to the particle on start
    pub reset_above_top: bool, // leaving through y < 0 resets
    pub lock_drag_while_running: bool, // points can only be dragged before launch
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            speed_cap: 12.0,
            radius_limit: 65.0,
            gravity_coefficient: 0.000025,
            sun_gravity: 0.04,
            initial_radius_fraction: 0.5,
            ease_stiffness: 0.07,
            ease_damping: 0.95,
            absorb_reach: 0.85,
            absorb_impulse: 0.5,
            gulp_factor: 3.0,
            collapse_shrink: 0.75,
            collapse_floor: 1.0,
            interference_to_point: false,
            launch_impulse: NVec2::new(0.5, -0.5),
            reset_above_top: true,
            lock_drag_while_running: false,
        }
    }
}
