//! Whole-rig evaluation.
//!
//! A [`RigConfig`] snapshot goes in and a report comes out; nothing is kept
//! between calls, so a caller re-evaluates on every parameter change and
//! keeps its previous report if the new configuration is rejected.

use glam::{DVec2, DVec3};
use rigview_core::{Rect, Result, RigConfig, TargetVolume};
use rigview_structures::{
    evaluate_coverage, evaluate_coverage_2d, generate_poses, generate_positions_2d, ground_point,
    CameraIntrinsics, CameraView, CoverageResult, CoverageResult2d, EllipseLayout,
};

/// Result of evaluating a rig in 3D.
#[derive(Debug, Clone, PartialEq)]
pub struct RigReport {
    /// Intrinsics shared by every camera.
    pub intrinsics: CameraIntrinsics,
    /// The layout the cameras were placed on.
    pub layout: EllipseLayout,
    /// The target box.
    pub target: TargetVolume,
    /// The point every camera looks at.
    pub look_at: DVec3,
    /// Per-camera results in placement order.
    pub cameras: Vec<CoverageResult>,
}

impl RigReport {
    /// Returns the number of cameras that see the whole target.
    pub fn covered_count(&self) -> usize {
        self.cameras.iter().filter(|c| c.covered).count()
    }

    /// Returns whether every camera sees the whole target.
    ///
    /// An empty rig trivially returns `true`.
    pub fn all_covered(&self) -> bool {
        self.cameras.iter().all(|c| c.covered)
    }

    /// Returns named camera views for drawing frustum wireframes.
    pub fn views(&self) -> Vec<CameraView> {
        self.cameras
            .iter()
            .map(|c| CameraView::from_coverage(format!("camera {}", c.index), c))
            .collect()
    }
}

/// Result of evaluating a rig top-down.
#[derive(Debug, Clone, PartialEq)]
pub struct RigReport2d {
    /// Full opening angle of each wedge in degrees.
    pub fov_degrees: f64,
    /// The target rectangle.
    pub target: Rect,
    /// The point every camera looks at.
    pub look_at: DVec2,
    /// Per-camera results in placement order.
    pub cameras: Vec<CoverageResult2d>,
}

impl RigReport2d {
    /// Returns the number of cameras whose wedge contains the whole rectangle.
    pub fn contained_count(&self) -> usize {
        self.cameras.iter().filter(|c| c.contained).count()
    }

    /// Returns the number of cameras whose wedge touches the rectangle.
    pub fn overlapping_count(&self) -> usize {
        self.cameras.iter().filter(|c| c.overlaps).count()
    }
}

/// Places the cameras of `config` and evaluates their coverage of the target box.
pub fn evaluate_rig(config: &RigConfig) -> Result<RigReport> {
    config.validate()?;
    let intrinsics = CameraIntrinsics::from_config(config)?;
    let layout = EllipseLayout::from_config(config);
    let target = config.target()?;
    let look_at = config.look_at();

    let poses = generate_poses(&layout, look_at)?;
    let cameras = evaluate_coverage(&poses, &intrinsics, &target)?;

    let report = RigReport {
        intrinsics,
        layout,
        target,
        look_at,
        cameras,
    };
    log::info!(
        "{}/{} cameras cover the target (vertical FOV {:.2} deg)",
        report.covered_count(),
        report.cameras.len(),
        intrinsics.fov_vertical_degrees
    );
    Ok(report)
}

/// Evaluates the rig top-down: wedges on the ground plane against the target footprint.
///
/// The wedge opening is the lens FOV of the configuration, not the
/// horizontal FOV of the 3D frustum (about 97.6 against 127 degrees for the
/// default 16:9 rig), so the 2D and 3D coverage flags need not agree.
pub fn evaluate_rig_2d(config: &RigConfig) -> Result<RigReport2d> {
    config.validate()?;
    let fov_degrees = config.fov_vertical_degrees()?;
    let layout = EllipseLayout::from_config(config);
    let target = config.target_rect()?;
    let look_at = ground_point(config.look_at());

    let positions = generate_positions_2d(&layout)?;
    let cameras = evaluate_coverage_2d(
        &positions,
        look_at,
        fov_degrees,
        config.near,
        config.far,
        &target,
    )?;

    let report = RigReport2d {
        fov_degrees,
        target,
        look_at,
        cameras,
    };
    log::info!(
        "top-down: {}/{} wedges contain the target, {} overlap it",
        report.contained_count(),
        report.cameras.len(),
        report.overlapping_count()
    );
    Ok(report)
}
