//! Fixed-step particle integrator
//!
//! Particles keep their accumulated speed between frames (momentum), so
//! each step only caps the speed and commits it to the position

use super::params::Parameters;
use super::states::Particle;
use super::vector::VectorOps;

/// Advance one particle by one frame.
/// Caps `|speed|` at `params.speed_cap` keeping its direction, remembers
/// the old position and moves by the speed
pub fn advance_particle(p: &mut Particle, params: &Parameters) {
    if p.speed.length() > params.speed_cap {
        p.speed.normalize_in_place().scale_by(params.speed_cap);
    }

    p.previous_position = p.position;
    let speed = p.speed;
    p.position.add_assign_v(&speed);
}

