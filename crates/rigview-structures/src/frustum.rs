//! Perspective view frustum and containment tests.
//!
//! The frustum is bounded by six planes whose normals face the interior. A
//! point is inside when its signed distance to every plane is at least
//! `-CONTAINMENT_EPSILON`, so points on the boundary count as inside.

use glam::DVec3;
use rigview_core::{Plane, Result, TargetVolume};

use crate::camera_view::{CameraIntrinsics, CameraPose};

/// Identifies one of the six frustum planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrustumPlane {
    /// Near clip plane, facing away from the camera.
    Near,
    /// Far clip plane, facing back toward the camera.
    Far,
    /// Left side plane through the apex.
    Left,
    /// Right side plane through the apex.
    Right,
    /// Top side plane through the apex.
    Top,
    /// Bottom side plane through the apex.
    Bottom,
}

impl FrustumPlane {
    /// All planes in storage order.
    pub const ALL: [FrustumPlane; 6] = [
        FrustumPlane::Near,
        FrustumPlane::Far,
        FrustumPlane::Left,
        FrustumPlane::Right,
        FrustumPlane::Top,
        FrustumPlane::Bottom,
    ];

    /// Returns the storage index of this plane.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            FrustumPlane::Near => 0,
            FrustumPlane::Far => 1,
            FrustumPlane::Left => 2,
            FrustumPlane::Right => 3,
            FrustumPlane::Top => 4,
            FrustumPlane::Bottom => 5,
        }
    }
}

/// A camera's view volume in world space.
#[derive(Debug, Clone, PartialEq)]
pub struct Frustum {
    /// Bounding planes: near, far, left, right, top, bottom.
    planes: [Plane; 6],
    /// Camera position (apex of the pyramid).
    apex: DVec3,
    /// Near quad then far quad, each bottom-left, bottom-right, top-right, top-left.
    corners: [DVec3; 8],
}

/// Builds the view frustum of a camera.
///
/// Fails with `InvalidPose` if the pose has no look direction or its up
/// vector is parallel to it, and with `InvalidParameter` if the intrinsics
/// are out of range.
pub fn build_frustum(pose: &CameraPose, intrinsics: &CameraIntrinsics) -> Result<Frustum> {
    intrinsics.validate()?;
    let (forward, up, right) = pose.camera_frame()?;
    let apex = pose.position;

    let half_v = intrinsics.half_vertical_radians();
    let half_h = intrinsics.half_horizontal_radians();
    let (sin_v, cos_v) = half_v.sin_cos();
    let (sin_h, cos_h) = half_h.sin_cos();

    // Side planes pass through the apex; each normal is the outward edge
    // direction rotated a quarter turn toward the optical axis.
    let planes = [
        Plane::new(apex + forward * intrinsics.near, forward),
        Plane::new(apex + forward * intrinsics.far, -forward),
        Plane::new(apex, right * cos_h + forward * sin_h),
        Plane::new(apex, -right * cos_h + forward * sin_h),
        Plane::new(apex, -up * cos_v + forward * sin_v),
        Plane::new(apex, up * cos_v + forward * sin_v),
    ];

    let tan_v = half_v.tan();
    let tan_h = half_h.tan();
    let quad = |distance: f64| {
        let center = apex + forward * distance;
        let half_up = up * (tan_v * distance);
        let half_right = right * (tan_h * distance);
        [
            center - half_right - half_up,
            center + half_right - half_up,
            center + half_right + half_up,
            center - half_right + half_up,
        ]
    };
    let near = quad(intrinsics.near);
    let far = quad(intrinsics.far);
    let corners = [
        near[0], near[1], near[2], near[3], far[0], far[1], far[2], far[3],
    ];

    Ok(Frustum {
        planes,
        apex,
        corners,
    })
}

impl Frustum {
    /// Returns the bounding planes in order near, far, left, right, top, bottom.
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Returns one bounding plane.
    pub fn plane(&self, which: FrustumPlane) -> &Plane {
        &self.planes[which.index()]
    }

    /// Returns the camera position.
    pub fn apex(&self) -> DVec3 {
        self.apex
    }

    /// Returns the near quad followed by the far quad.
    pub fn corners(&self) -> &[DVec3; 8] {
        &self.corners
    }

    /// Returns whether a point lies inside the frustum, boundary included.
    pub fn contains_point(&self, point: DVec3) -> bool {
        self.planes.iter().all(|plane| plane.is_kept(point))
    }

    /// Returns whether the whole box lies inside the frustum.
    ///
    /// This is a full-containment test: a box that only intersects the
    /// frustum returns `false`.
    pub fn contains_box(&self, target: &TargetVolume) -> bool {
        target
            .corners()
            .iter()
            .all(|&corner| self.contains_point(corner))
    }
}

/// Returns whether `point` lies inside `frustum`.
pub fn contains_point(frustum: &Frustum, point: DVec3) -> bool {
    frustum.contains_point(point)
}

/// Returns whether `target` lies entirely inside `frustum`.
pub fn contains_box(frustum: &Frustum, target: &TargetVolume) -> bool {
    frustum.contains_box(target)
}
