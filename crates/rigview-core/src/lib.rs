//! Core types for rigview.
//!
//! This crate provides the building blocks shared by the rig evaluation:
//! - [`RigError`] and the crate-wide [`Result`]
//! - [`RigConfig`], the immutable configuration snapshot
//! - [`Plane`] and [`HalfPlane`] for bounding view volumes
//! - [`TargetVolume`] and [`Rect`] for the observed target

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod plane;
pub mod target;

pub use config::{fov_from_focal_length, RigConfig, Spacing, TargetDimensions};
pub use error::{Result, RigError};
pub use plane::{HalfPlane, Plane, CONTAINMENT_EPSILON};
pub use target::{Rect, TargetVolume};

// Re-export glam types for convenience
pub use glam::{DMat4, DVec2, DVec3};
