//! rigview: camera rig placement and frustum coverage.
//!
//! rigview places cameras evenly around an ellipse, aims them at a common
//! point and checks whether each camera's view frustum fully contains a
//! target box. A rendering layer calls it with a configuration snapshot
//! and draws the returned poses, frusta and coverage flags.
//!
//! # Quick Start
//!
//! ```no_run
//! use rigview::*;
//!
//! fn main() -> Result<()> {
//!     init();
//!
//!     let config = RigConfig {
//!         num_of_cameras: 8,
//!         focal_length: 12.0,
//!         ..RigConfig::default()
//!     };
//!     let report = evaluate_rig(&config)?;
//!     for camera in &report.cameras {
//!         println!("camera {}: covered = {}", camera.index, camera.covered);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Pieces
//!
//! - [`generate_poses`] - camera poses on an [`EllipseLayout`]
//! - [`build_frustum`] - the six inward-facing planes of a camera's view
//! - [`evaluate_coverage`] - full-containment test of a [`TargetVolume`] per camera
//! - [`evaluate_coverage_2d`] - the same top-down, with [`Wedge`]s and a [`Rect`]
//!
//! Containment is inclusive: points on a frustum plane, within
//! [`CONTAINMENT_EPSILON`], count as inside. A target that only intersects a
//! frustum is not covered.

mod init;
mod rig;

// Re-export core types
pub use rigview_core::{
    config::{fov_from_focal_length, RigConfig, Spacing, TargetDimensions},
    error::{Result, RigError},
    plane::{HalfPlane, Plane, CONTAINMENT_EPSILON},
    target::{Rect, TargetVolume},
    DMat4, DVec2, DVec3,
};

// Re-export structure types
pub use rigview_structures::{
    build_frustum, build_wedge, contains_box, contains_point, evaluate_coverage,
    evaluate_coverage_2d, generate_poses, generate_positions_2d, ground_point, CameraIntrinsics,
    CameraPose, CameraView, CoverageResult, CoverageResult2d, EllipseLayout, Frustum,
    FrustumPlane, Wedge,
};

pub use init::init;
pub use rig::{evaluate_rig, evaluate_rig_2d, RigReport, RigReport2d};
