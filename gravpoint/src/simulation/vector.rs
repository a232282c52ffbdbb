//! 2D vector helpers on top of nalgebra
//!
//! `NVec2` is the one vector type used by the simulation. The free functions
//! build new values; the [`VectorOps`] methods mutate in place and return
//! `&mut Self` so calls can be chained

use nalgebra::Vector2;

pub type NVec2 = Vector2<f64>;

/// `a + b` as a new vector
pub fn add(a: &NVec2, b: &NVec2) -> NVec2 {
    a + b
}

/// `a - b` as a new vector
pub fn sub(a: &NVec2, b: &NVec2) -> NVec2 {
    a - b
}

/// `v * s` as a new vector
pub fn scale(v: &NVec2, s: f64) -> NVec2 {
    v * s
}

pub trait VectorOps {
    fn add_assign_v(&mut self, v: &NVec2) -> &mut Self;
    fn sub_assign_v(&mut self, v: &NVec2) -> &mut Self;
    fn scale_by(&mut self, s: f64) -> &mut Self;

    /// Scale to unit length. A zero vector is left untouched
    fn normalize_in_place(&mut self) -> &mut Self;

    /// Move `t` of the way toward `target`
    fn lerp_to(&mut self, target: &NVec2, t: f64) -> &mut Self;

    fn length(&self) -> f64;
    fn length_squared(&self) -> f64;

    /// Unit copy of the vector, zero stays zero
    fn normalized_or_zero(&self) -> NVec2;

    /// Angle of the vector in radians
    fn heading(&self) -> f64;

    /// Angle of the line from `self` to `other` in radians
    fn heading_to(&self, other: &NVec2) -> f64;

    fn distance_to(&self, other: &NVec2) -> f64;
    fn distance_to_squared(&self, other: &NVec2) -> f64;
}

impl VectorOps for NVec2 {
    fn add_assign_v(&mut self, v: &NVec2) -> &mut Self {
        *self += v;
        self
    }

    fn sub_assign_v(&mut self, v: &NVec2) -> &mut Self {
        *self -= v;
        self
    }

    fn scale_by(&mut self, s: f64) -> &mut Self {
        *self *= s;
        self
    }

    fn normalize_in_place(&mut self) -> &mut Self {
        *self = self.normalized_or_zero();
        self
    }

    fn lerp_to(&mut self, target: &NVec2, t: f64) -> &mut Self {
        *self = self.lerp(target, t);
        self
    }

    fn length(&self) -> f64 {
        self.norm()
    }

    fn length_squared(&self) -> f64 {
        self.norm_squared()
    }

    fn normalized_or_zero(&self) -> NVec2 {
        self.try_normalize(0.0).unwrap_or_else(NVec2::zeros)
    }

    fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }

    fn heading_to(&self, other: &NVec2) -> f64 {
        (other - self).heading()
    }

    fn distance_to(&self, other: &NVec2) -> f64 {
        (other - self).norm()
    }

    fn distance_to_squared(&self, other: &NVec2) -> f64 {
        (other - self).norm_squared()
    }
}

/// Unit vector pointing from `from` toward `to`, zero if they coincide
pub fn direction(from: &NVec2, to: &NVec2) -> NVec2 {
    (to - from).normalized_or_zero()
}
