//! Camera rig structures for rigview.
//!
//! This crate provides the geometric pieces of a rig evaluation:
//! - Camera intrinsics, poses and camera views
//! - Ellipse layouts and pose generation
//! - View frusta and their 2D counterpart, wedges
//! - Coverage evaluation against a target volume

// Geometry code intentionally converts camera indices to angles
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod camera_view;
pub mod coverage;
pub mod frustum;
pub mod layout;
pub mod wedge;

pub use camera_view::{CameraIntrinsics, CameraPose, CameraView};
pub use coverage::{
    evaluate_coverage, evaluate_coverage_2d, ground_point, CoverageResult, CoverageResult2d,
};
pub use frustum::{build_frustum, contains_box, contains_point, Frustum, FrustumPlane};
pub use layout::{generate_poses, generate_positions_2d, EllipseLayout};
pub use wedge::{build_wedge, Wedge};
