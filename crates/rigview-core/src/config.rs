//! Rig configuration snapshot.
//!
//! Every parameter change produces a new [`RigConfig`]; nothing downstream
//! keeps state between evaluations.

use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_positive, RigError, Result};
use crate::target::{Rect, TargetVolume};

/// User FOV overrides at or below this many degrees are ignored.
pub const USER_FOV_THRESHOLD_DEGREES: f64 = 1.0;

/// How cameras are distributed along the ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Spacing {
    /// Evenly spaced in parameter angle (`θ = 2πi/n`).
    #[default]
    Parameter,
    /// Evenly spaced in arc length along the ellipse.
    ArcLength,
}

/// Dimensions of the target box, which stands on the ground centered on the Y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetDimensions {
    /// Extent along X.
    pub width: f64,
    /// Extent along Y, measured up from the ground.
    pub height: f64,
    /// Extent along Z.
    pub depth: f64,
}

impl Default for TargetDimensions {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 240.0,
            depth: 100.0,
        }
    }
}

/// Immutable configuration for one rig evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RigConfig {
    /// Ellipse radius along X.
    pub ellipse_radius_x: f64,
    /// Ellipse radius along Z.
    pub ellipse_radius_y: f64,
    /// Number of cameras on the ellipse.
    pub num_of_cameras: usize,
    /// Lens focal length in millimetres.
    pub focal_length: f64,
    /// Sensor size in millimetres.
    pub sensor_size: f64,
    /// Image aspect ratio (width / height).
    pub aspect_ratio: f64,
    /// Height of the camera ring above the ground.
    pub camera_height: f64,
    /// Explicit vertical FOV in degrees; only used when above [`USER_FOV_THRESHOLD_DEGREES`].
    pub user_fov: Option<f64>,
    /// Target box dimensions.
    pub target: TargetDimensions,
    /// Near clip distance.
    pub near: f64,
    /// Far clip distance.
    pub far: f64,
    /// Camera distribution along the ellipse.
    pub spacing: Spacing,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            ellipse_radius_x: 300.0,
            ellipse_radius_y: 300.0,
            num_of_cameras: 12,
            focal_length: 7.0,
            sensor_size: 16.0,
            aspect_ratio: 16.0 / 9.0,
            camera_height: 120.0,
            user_fov: None,
            target: TargetDimensions::default(),
            near: 1.0,
            far: 2000.0,
            spacing: Spacing::Parameter,
        }
    }
}

/// Returns the field of view in degrees for a lens and sensor: `2·atan(sensor / (2·focal))`.
pub fn fov_from_focal_length(focal_length: f64, sensor_size: f64) -> Result<f64> {
    ensure_positive("focalLength", focal_length)?;
    ensure_positive("sensorSize", sensor_size)?;
    Ok((2.0 * (sensor_size / (2.0 * focal_length)).atan()).to_degrees())
}

impl RigConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::debug!("loading rig config from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Checks every parameter, reporting the first one out of range.
    ///
    /// `num_of_cameras == 0` is valid and describes an empty rig.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("ellipseRadiusX", self.ellipse_radius_x)?;
        ensure_positive("ellipseRadiusY", self.ellipse_radius_y)?;
        ensure_positive("aspectRatio", self.aspect_ratio)?;
        ensure_finite("cameraHeight", self.camera_height)?;
        ensure_positive("near", self.near)?;
        ensure_positive("far", self.far)?;
        if self.near >= self.far {
            return Err(RigError::InvalidParameter(format!(
                "near ({}) must be less than far ({})",
                self.near, self.far
            )));
        }
        let fov = self.fov_vertical_degrees()?;
        if fov <= 0.0 || fov >= 180.0 {
            return Err(RigError::InvalidParameter(format!(
                "vertical FOV must be in (0, 180) degrees, got {fov}"
            )));
        }
        self.target()?;
        Ok(())
    }

    /// Returns the vertical FOV in degrees, honouring the user override when it applies.
    pub fn fov_vertical_degrees(&self) -> Result<f64> {
        match self.user_fov {
            Some(fov) if fov > USER_FOV_THRESHOLD_DEGREES => {
                ensure_finite("userFov", fov)?;
                Ok(fov)
            }
            Some(fov) => {
                log::warn!(
                    "ignoring userFov {fov}: must exceed {USER_FOV_THRESHOLD_DEGREES} degrees"
                );
                fov_from_focal_length(self.focal_length, self.sensor_size)
            }
            None => fov_from_focal_length(self.focal_length, self.sensor_size),
        }
    }

    /// Returns the point every camera looks at: the ring height above the origin.
    pub fn look_at(&self) -> DVec3 {
        DVec3::new(0.0, self.camera_height, 0.0)
    }

    /// Returns the target box, standing on the ground at the origin.
    pub fn target(&self) -> Result<TargetVolume> {
        let TargetDimensions {
            width,
            height,
            depth,
        } = self.target;
        TargetVolume::on_ground(width, height, depth)
    }

    /// Returns the top-down target rectangle (width along X, depth along Z).
    pub fn target_rect(&self) -> Result<Rect> {
        Ok(self.target()?.footprint())
    }
}
