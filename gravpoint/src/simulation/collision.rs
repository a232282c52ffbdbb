//! Arrival checks of a particle against the field

use super::params::Parameters;
use super::states::{GravityPoint, Particle};
use super::vector::VectorOps;

/// Result of a particle touching something
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won, // reached the finish point
    Reset, // hit another point or left the field
}

/// First outcome for `p` against the remaining points, if any.
/// Leaving through the top edge is checked before the points
pub fn check_collision(p: &Particle, points: &[GravityPoint], params: &Parameters) -> Option<Outcome> {
    if params.reset_above_top && p.position.y < 0.0 {
        return Some(Outcome::Reset);
    }

    points
        .iter()
        .filter(|g| !g.destroyed)
        .find(|g| p.position.distance_to(&g.position) < g.target_radius)
        .map(|g| if g.role.is_finish() { Outcome::Won } else { Outcome::Reset })
}
