//! Per-camera coverage of the target.
//!
//! Each camera is evaluated independently: its frustum is built and the
//! target is tested for full containment. Either every camera evaluates or
//! the call fails as a whole.

use glam::{DVec2, DVec3};
use rigview_core::{Rect, Result, TargetVolume};

use crate::camera_view::{CameraIntrinsics, CameraPose};
use crate::frustum::{build_frustum, Frustum};
use crate::wedge::{build_wedge, Wedge};

/// Coverage of the target by one camera.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageResult {
    /// Position of the camera in the input sequence.
    pub index: usize,
    /// The evaluated pose.
    pub pose: CameraPose,
    /// The camera's frustum.
    pub frustum: Frustum,
    /// Whether the whole target lies inside the frustum.
    pub covered: bool,
}

/// Top-down coverage of the target rectangle by one camera.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageResult2d {
    /// Position of the camera in the input sequence.
    pub index: usize,
    /// Camera position on the ground plane.
    pub position: DVec2,
    /// The camera's view wedge.
    pub wedge: Wedge,
    /// Whether the whole rectangle lies inside the wedge.
    pub contained: bool,
    /// Whether the rectangle and the wedge overlap at all.
    pub overlaps: bool,
}

/// Evaluates full-containment coverage of `target` for every pose, in order.
pub fn evaluate_coverage(
    poses: &[CameraPose],
    intrinsics: &CameraIntrinsics,
    target: &TargetVolume,
) -> Result<Vec<CoverageResult>> {
    poses
        .iter()
        .enumerate()
        .map(|(index, pose)| {
            let frustum = build_frustum(pose, intrinsics)?;
            let covered = frustum.contains_box(target);
            log::debug!(
                "camera {index} at {}: {}",
                pose.position,
                if covered { "covers target" } else { "misses target" }
            );
            Ok(CoverageResult {
                index,
                pose: *pose,
                frustum,
                covered,
            })
        })
        .collect()
}

/// Evaluates top-down coverage of `rect` by cameras at `positions` aimed at `look_at`.
pub fn evaluate_coverage_2d(
    positions: &[DVec2],
    look_at: DVec2,
    fov_degrees: f64,
    near: f64,
    far: f64,
    rect: &Rect,
) -> Result<Vec<CoverageResult2d>> {
    positions
        .iter()
        .enumerate()
        .map(|(index, &position)| {
            let wedge = build_wedge(position, look_at, fov_degrees, near, far)?;
            let contained = wedge.contains_rect(rect);
            let overlaps = contained || wedge.overlaps_rect(rect);
            log::debug!("camera {index} at {position}: contained={contained} overlaps={overlaps}");
            Ok(CoverageResult2d {
                index,
                position,
                wedge,
                contained,
                overlaps,
            })
        })
        .collect()
}

/// Projects a world point onto the top-down `(x, z)` plane.
pub fn ground_point(point: DVec3) -> DVec2 {
    DVec2::new(point.x, point.z)
}
