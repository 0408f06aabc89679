//! Top-down field-of-view wedge, the 2D counterpart of [`crate::Frustum`].
//!
//! A wedge is bounded by four half-planes (near, far, left, right), which
//! makes it a convex trapezoid. Containment checks every rectangle corner;
//! overlap uses a separating-axis test, which is exact for two convex
//! polygons.

use glam::DVec2;
use rigview_core::{HalfPlane, Rect, Result, RigError, CONTAINMENT_EPSILON};

/// A camera's top-down view region.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    /// Bounding half-planes: near, far, left, right.
    edges: [HalfPlane; 4],
    /// Camera position (tip of the wedge).
    apex: DVec2,
    /// Near-left, near-right, far-right, far-left.
    corners: [DVec2; 4],
}

/// Builds the wedge seen by a camera at `position` aimed at `look_at`.
///
/// `fov_degrees` is the full opening angle of the wedge.
pub fn build_wedge(
    position: DVec2,
    look_at: DVec2,
    fov_degrees: f64,
    near: f64,
    far: f64,
) -> Result<Wedge> {
    if !(fov_degrees > 0.0 && fov_degrees < 180.0) {
        return Err(RigError::InvalidParameter(format!(
            "FOV must be in (0, 180) degrees, got {fov_degrees}"
        )));
    }
    if !(near > 0.0 && near < far && far.is_finite()) {
        return Err(RigError::InvalidParameter(format!(
            "clip distances must satisfy 0 < near < far, got near={near} far={far}"
        )));
    }
    let dir = look_at - position;
    let len = dir.length();
    if !(len > 1e-12) {
        return Err(RigError::InvalidPose(format!(
            "camera at {position} has no look direction"
        )));
    }
    let forward = dir / len;
    let right = forward.perp();

    let half = fov_degrees.to_radians() / 2.0;
    let (sin_h, cos_h) = half.sin_cos();
    let edges = [
        HalfPlane::new(position + forward * near, forward),
        HalfPlane::new(position + forward * far, -forward),
        HalfPlane::new(position, right * cos_h + forward * sin_h),
        HalfPlane::new(position, -right * cos_h + forward * sin_h),
    ];

    let tan_h = half.tan();
    let corners = [
        position + forward * near - right * (tan_h * near),
        position + forward * near + right * (tan_h * near),
        position + forward * far + right * (tan_h * far),
        position + forward * far - right * (tan_h * far),
    ];

    Ok(Wedge {
        edges,
        apex: position,
        corners,
    })
}

impl Wedge {
    /// Returns the bounding half-planes: near, far, left, right.
    pub fn edges(&self) -> &[HalfPlane; 4] {
        &self.edges
    }

    /// Returns the camera position.
    pub fn apex(&self) -> DVec2 {
        self.apex
    }

    /// Returns the trapezoid corners: near-left, near-right, far-right, far-left.
    pub fn corners(&self) -> &[DVec2; 4] {
        &self.corners
    }

    /// Returns whether a point lies inside the wedge, boundary included.
    pub fn contains_point(&self, point: DVec2) -> bool {
        self.edges.iter().all(|edge| edge.is_kept(point))
    }

    /// Returns whether the whole rectangle lies inside the wedge.
    pub fn contains_rect(&self, rect: &Rect) -> bool {
        rect.corners().iter().all(|&c| self.contains_point(c))
    }

    /// Returns whether the rectangle and the wedge share any point.
    pub fn overlaps_rect(&self, rect: &Rect) -> bool {
        let rect_corners = rect.corners();
        let axes = self
            .edges
            .iter()
            .map(HalfPlane::normal)
            .chain([DVec2::X, DVec2::Y]);
        for axis in axes {
            let (a_min, a_max) = project(&self.corners, axis);
            let (b_min, b_max) = project(&rect_corners, axis);
            if a_max < b_min - CONTAINMENT_EPSILON || b_max < a_min - CONTAINMENT_EPSILON {
                return false;
            }
        }
        true
    }
}

fn project(points: &[DVec2], axis: DVec2) -> (f64, f64) {
    points
        .iter()
        .map(|p| p.dot(axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| {
            (lo.min(d), hi.max(d))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wedge_looking_down_x() -> Wedge {
        // Apex at (-10, 0) looking toward the origin with a 90 degree opening.
        build_wedge(DVec2::new(-10.0, 0.0), DVec2::ZERO, 90.0, 1.0, 100.0).unwrap()
    }

    #[test]
    fn test_contains_point() {
        let wedge = wedge_looking_down_x();
        assert!(wedge.contains_point(DVec2::ZERO));
        assert!(wedge.contains_point(DVec2::new(0.0, 9.0)));
        assert!(!wedge.contains_point(DVec2::new(0.0, 11.0)));
        assert!(!wedge.contains_point(DVec2::new(-20.0, 0.0)));
        assert!(!wedge.contains_point(DVec2::new(-9.5, 0.0)));
    }

    #[test]
    fn test_rect_fully_inside_without_edge_crossing() {
        // Neither boundary ray crosses this rectangle, yet it is contained.
        let wedge = wedge_looking_down_x();
        let rect = Rect::from_center_size(DVec2::ZERO, 4.0, 4.0).unwrap();
        assert!(wedge.contains_rect(&rect));
        assert!(wedge.overlaps_rect(&rect));
    }

    #[test]
    fn test_rect_partially_inside() {
        let wedge = wedge_looking_down_x();
        let rect = Rect::from_center_size(DVec2::ZERO, 4.0, 30.0).unwrap();
        assert!(!wedge.contains_rect(&rect));
        assert!(wedge.overlaps_rect(&rect));
    }

    #[test]
    fn test_rect_outside() {
        let wedge = wedge_looking_down_x();
        // Behind the camera.
        let behind = Rect::from_center_size(DVec2::new(-30.0, 0.0), 4.0, 4.0).unwrap();
        assert!(!wedge.overlaps_rect(&behind));
        // Beside the wedge, past the left boundary.
        let beside = Rect::from_center_size(DVec2::new(-5.0, 15.0), 2.0, 2.0).unwrap();
        assert!(!wedge.overlaps_rect(&beside));
        assert!(!wedge.contains_rect(&beside));
    }

    #[test]
    fn test_rect_touching_boundary_is_contained() {
        let wedge = wedge_looking_down_x();
        // At x = 0 the wedge spans y in [-10, 10].
        let rect = Rect::new(DVec2::new(0.0, 0.0), DVec2::new(5.0, 10.0)).unwrap();
        assert!(wedge.contains_rect(&rect));
    }

    #[test]
    fn test_invalid_wedges() {
        assert!(matches!(
            build_wedge(DVec2::ONE, DVec2::ONE, 60.0, 1.0, 10.0),
            Err(RigError::InvalidPose(_))
        ));
        assert!(matches!(
            build_wedge(DVec2::ZERO, DVec2::X, 180.0, 1.0, 10.0),
            Err(RigError::InvalidParameter(_))
        ));
        assert!(matches!(
            build_wedge(DVec2::ZERO, DVec2::X, 60.0, 10.0, 1.0),
            Err(RigError::InvalidParameter(_))
        ));
    }
}
