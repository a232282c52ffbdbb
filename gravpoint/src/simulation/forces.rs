//! Per-frame update of a single gravity point
//!
//! A point pulls every particle toward itself, eases its display radius,
//! pulls on (and possibly absorbs) its peers, and collapses once it grows
//! past the radius limit

use bevy::log::debug;

use crate::simulation::params::Parameters;
use crate::simulation::states::{GravityPoint, Particle};
use crate::simulation::vector::{direction, scale, sub, NVec2, VectorOps};
use std::f64::consts::PI;

/// Something that happened to a point during its step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointEvent {
    /// `absorber` swallowed `absorbed` (point ids)
    Absorbed { absorber: usize, absorbed: usize },
    /// Point went over the radius limit and starts collapsing next frame
    CollapseTriggered { id: usize },
    /// Collapsing point shrank below the floor
    Collapsed { id: usize },
}

/// Borrow two distinct points of the arena mutably at once
fn pair_mut(points: &mut [GravityPoint], a: usize, b: usize) -> (&mut GravityPoint, &mut GravityPoint) {
    assert_ne!(a, b, "a point never interacts with itself");
    if a < b {
        let (left, right) = points.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = points.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

/// Pull every particle toward point `p`
pub fn exert_on_particles(p: &GravityPoint, particles: &mut [Particle], started: bool) {
    for particle in particles.iter_mut() {
        // unit vector particle -> point, scaled by the point's gravity
        let pull = scale(&direction(&particle.position, &p.position), p.gravity);
        particle.accumulate_force(&pull, started);
    }
}

/// Spring the eased radius toward the target radius
pub fn ease_radius(p: &mut GravityPoint, params: &Parameters) {
    p.ease_velocity = (p.ease_velocity + (p.target_radius - p.current_radius) * params.ease_stiffness) * params.ease_damping;
    p.current_radius += p.ease_velocity;
    if p.current_radius < 0.0 {
        p.current_radius = 0.0;
    }
}

/// Shrink a collapsing point one frame. Returns true once it is gone
pub fn shrink_collapsing(p: &mut GravityPoint, params: &Parameters) -> bool {
    p.target_radius *= params.collapse_shrink;
    if p.current_radius < params.collapse_floor {
        p.destroyed = true;
    }
    p.destroyed
}

/// Absorption test of `this` against peer `g`
pub fn can_absorb(this: &GravityPoint, g: &GravityPoint, params: &Parameters) -> bool {
    (this.current_radius >= g.target_radius || this.dragging)
        && this.position.distance_to(&g.position) < (this.current_radius + g.target_radius) * params.absorb_reach
}

/// `this` swallows `g`.
///
/// `area` is the area of `this` before its step started. The eased radius
/// overshoots with `gulp_factor` times the absorbed area and springs back to
/// the target radius afterwards
pub fn absorb(this: &mut GravityPoint, g: &mut GravityPoint, area: f64, params: &Parameters) {
    g.destroyed = true;
    this.gravity += g.gravity;

    // kick toward the swallowed point, proportional to the size ratio
    if this.target_radius > 0.0 {
        let kick = scale(&sub(&g.position, &this.position), g.target_radius / this.target_radius * params.absorb_impulse);
        this.add_speed(&kick);
    }

    let garea = g.target_radius * g.target_radius * PI;
    this.current_radius = ((area + garea * params.gulp_factor) / PI).sqrt();
    this.target_radius = ((area + garea) / PI).sqrt();
}

/// Run one frame for point `i`.
///
/// Destroyed points are skipped. Peers destroyed earlier in the same pass
/// are skipped too, so destructions take effect immediately
pub fn step_point(
    points: &mut [GravityPoint],
    i: usize,
    particles: &mut [Particle],
    params: &Parameters,
    started: bool,
    events: &mut Vec<PointEvent>,
) {
    if points[i].destroyed {
        return;
    }

    // 1. particles
    if points[i].targets.particles {
        exert_on_particles(&points[i], particles, started);
    }

    // 2. radius easing
    ease_radius(&mut points[i], params);

    // 3. collapsing points only shrink, no peer interaction
    if points[i].collapsing {
        if shrink_collapsing(&mut points[i], params) {
            debug!("point {} collapsed", points[i].id);
            events.push(PointEvent::Collapsed { id: points[i].id });
        }
        return;
    }

    // 4. peers
    if points[i].targets.peers {
        // area before any absorption this frame
        let area = points[i].target_radius * points[i].target_radius * PI;

        for j in 0..points.len() {
            if j == i || points[j].destroyed {
                continue;
            }
            let (this, g) = pair_mut(points, i, j);

            if can_absorb(this, g, params) {
                absorb(this, g, area, params);
                debug!(
                    "point {} absorbed point {} (radius {:.2}, gravity {:.5})",
                    this.id, g.id, this.target_radius, this.gravity
                );
                events.push(PointEvent::Absorbed { absorber: this.id, absorbed: g.id });
            }

            // the peer is pulled even when it was just absorbed
            let pull = scale(&direction(&g.position, &this.position), this.gravity);
            g.add_speed(&pull);
        }
    }

    let this = &mut points[i];

    // 5. drift from collected forces, off by default
    if params.interference_to_point && !this.dragging {
        let drift: NVec2 = this.speed_accumulator;
        this.position.add_assign_v(&drift);
    }

    // 6. accumulator is frame local for points
    this.speed_accumulator = NVec2::zeros();

    // 7. too big, collapse from the next frame on
    if this.role.collapses_when_oversized() && this.current_radius > params.radius_limit {
        this.collapse();
        debug!("point {} exceeded radius limit, collapsing", this.id);
        events.push(PointEvent::CollapseTriggered { id: this.id });
    }
}
