//! Oriented planes and half-planes used to bound view volumes.
//!
//! A plane is stored in point-normal form. The normal points toward the
//! kept side, so a point is inside when its signed distance is non-negative.

use glam::{DVec2, DVec3};

/// Tolerance applied to signed distances in containment tests.
///
/// Points within this distance outside a plane still count as inside.
pub const CONTAINMENT_EPSILON: f64 = 1e-6;

/// An oriented plane in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// A point on the plane.
    origin: DVec3,
    /// Unit normal pointing toward the kept half-space.
    normal: DVec3,
}

impl Plane {
    /// Creates a plane through `origin` with the given normal.
    ///
    /// The normal is normalized; it must not be zero.
    pub fn new(origin: DVec3, normal: DVec3) -> Self {
        Self {
            origin,
            normal: normal.normalize(),
        }
    }

    /// Returns a point on the plane.
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Returns the unit normal of the plane.
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Returns the plane constant `d` such that `normal · p + d = 0` on the plane.
    pub fn distance(&self) -> f64 {
        -self.normal.dot(self.origin)
    }

    /// Returns the signed distance from a point to the plane.
    ///
    /// Positive values are on the normal side (kept), negative on the opposite side.
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        (point - self.origin).dot(self.normal)
    }

    /// Returns whether a point is on the kept side, boundary included.
    pub fn is_kept(&self, point: DVec3) -> bool {
        self.signed_distance(point) >= -CONTAINMENT_EPSILON
    }

    /// Projects a point onto the plane.
    pub fn project(&self, point: DVec3) -> DVec3 {
        point - self.signed_distance(point) * self.normal
    }
}

/// An oriented line in 2D bounding a half-plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfPlane {
    origin: DVec2,
    normal: DVec2,
}

impl HalfPlane {
    /// Creates a half-plane through `origin` whose kept side faces `normal`.
    pub fn new(origin: DVec2, normal: DVec2) -> Self {
        Self {
            origin,
            normal: normal.normalize(),
        }
    }

    /// Returns a point on the boundary line.
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    /// Returns the unit normal pointing into the kept side.
    pub fn normal(&self) -> DVec2 {
        self.normal
    }

    /// Returns the signed distance from a point to the boundary line.
    pub fn signed_distance(&self, point: DVec2) -> f64 {
        (point - self.origin).dot(self.normal)
    }

    /// Returns whether a point is on the kept side, boundary included.
    pub fn is_kept(&self, point: DVec2) -> bool {
        self.signed_distance(point) >= -CONTAINMENT_EPSILON
    }
}
