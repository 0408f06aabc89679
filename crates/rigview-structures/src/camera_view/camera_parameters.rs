//! Camera parameters (intrinsics and pose).

use glam::{DMat4, DVec3};
use rigview_core::{fov_from_focal_length, Result, RigConfig, RigError};

/// Directions shorter than this are treated as degenerate.
const MIN_DIRECTION_LENGTH: f64 = 1e-12;

/// Camera intrinsics parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraIntrinsics {
    /// Vertical field of view in degrees.
    pub fov_vertical_degrees: f64,
    /// Aspect ratio (width / height).
    pub aspect_ratio: f64,
    /// Near clip distance.
    pub near: f64,
    /// Far clip distance.
    pub far: f64,
}

impl CameraIntrinsics {
    /// Creates new camera intrinsics, rejecting out-of-range values.
    pub fn new(fov_vertical_degrees: f64, aspect_ratio: f64, near: f64, far: f64) -> Result<Self> {
        let intrinsics = Self {
            fov_vertical_degrees,
            aspect_ratio,
            near,
            far,
        };
        intrinsics.validate()?;
        Ok(intrinsics)
    }

    /// Creates intrinsics from a lens: `fov = 2·atan(sensor / (2·focal))`.
    pub fn from_lens(
        focal_length: f64,
        sensor_size: f64,
        aspect_ratio: f64,
        near: f64,
        far: f64,
    ) -> Result<Self> {
        let fov = fov_from_focal_length(focal_length, sensor_size)?;
        Self::new(fov, aspect_ratio, near, far)
    }

    /// Creates intrinsics from horizontal FoV and aspect ratio.
    pub fn from_horizontal_fov(
        fov_horizontal_degrees: f64,
        aspect_ratio: f64,
        near: f64,
        far: f64,
    ) -> Result<Self> {
        if !(aspect_ratio > 0.0) {
            return Err(RigError::InvalidParameter(format!(
                "aspect ratio must be positive, got {aspect_ratio}"
            )));
        }
        // tan(v/2) = tan(h/2) / aspect
        let h_rad = fov_horizontal_degrees.to_radians();
        let v_rad = 2.0 * ((h_rad / 2.0).tan() / aspect_ratio).atan();
        Self::new(v_rad.to_degrees(), aspect_ratio, near, far)
    }

    /// Derives the intrinsics described by a rig configuration.
    pub fn from_config(config: &RigConfig) -> Result<Self> {
        Self::new(
            config.fov_vertical_degrees()?,
            config.aspect_ratio,
            config.near,
            config.far,
        )
    }

    /// Checks `0 < fov < 180`, `aspect > 0` and `0 < near < far`.
    pub fn validate(&self) -> Result<()> {
        let fov = self.fov_vertical_degrees;
        if !(fov > 0.0 && fov < 180.0) {
            return Err(RigError::InvalidParameter(format!(
                "vertical FOV must be in (0, 180) degrees, got {fov}"
            )));
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(RigError::InvalidParameter(format!(
                "aspect ratio must be positive, got {}",
                self.aspect_ratio
            )));
        }
        if !(self.near > 0.0 && self.near < self.far && self.far.is_finite()) {
            return Err(RigError::InvalidParameter(format!(
                "clip distances must satisfy 0 < near < far, got near={} far={}",
                self.near, self.far
            )));
        }
        Ok(())
    }

    /// Returns half the vertical FOV in radians.
    pub fn half_vertical_radians(&self) -> f64 {
        self.fov_vertical_degrees.to_radians() / 2.0
    }

    /// Returns half the horizontal FOV in radians: `atan(tan(halfV) · aspect)`.
    pub fn half_horizontal_radians(&self) -> f64 {
        (self.half_vertical_radians().tan() * self.aspect_ratio).atan()
    }

    /// Returns the horizontal field of view in degrees.
    pub fn horizontal_fov_degrees(&self) -> f64 {
        (2.0 * self.half_horizontal_radians()).to_degrees()
    }

    /// Returns the right-handed perspective projection matrix.
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh(
            self.fov_vertical_degrees.to_radians(),
            self.aspect_ratio,
            self.near,
            self.far,
        )
    }
}

/// Camera pose: where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera position in world space.
    pub position: DVec3,
    /// Point the camera is aimed at.
    pub look_at: DVec3,
    /// Approximate up direction; re-orthogonalized in [`CameraPose::camera_frame`].
    pub up: DVec3,
}

impl CameraPose {
    /// Creates a pose from position, target and up direction.
    pub fn new(position: DVec3, look_at: DVec3, up: DVec3) -> Self {
        Self {
            position,
            look_at,
            up,
        }
    }

    /// Creates a pose looking at `look_at` with world +Y up.
    pub fn looking_at(position: DVec3, look_at: DVec3) -> Self {
        Self::new(position, look_at, DVec3::Y)
    }

    /// Returns the unit look direction.
    ///
    /// Fails with [`RigError::InvalidPose`] when position and target coincide.
    pub fn forward(&self) -> Result<DVec3> {
        let dir = self.look_at - self.position;
        let len = dir.length();
        if !(len > MIN_DIRECTION_LENGTH) {
            return Err(RigError::InvalidPose(format!(
                "camera at {} has no look direction (look-at point {})",
                self.position, self.look_at
            )));
        }
        Ok(dir / len)
    }

    /// Gets the camera frame as (forward, up, right).
    ///
    /// `right = normalize(forward × up)` and the returned up is `right × forward`.
    pub fn camera_frame(&self) -> Result<(DVec3, DVec3, DVec3)> {
        let forward = self.forward()?;
        let right = forward.cross(self.up);
        let len = right.length();
        if !(len > MIN_DIRECTION_LENGTH) {
            return Err(RigError::InvalidPose(format!(
                "up direction {} is parallel to the look direction {forward}",
                self.up
            )));
        }
        let right = right / len;
        let up = right.cross(forward);
        Ok((forward, up, right))
    }

    /// Returns the view matrix (world to camera space).
    pub fn view_matrix(&self) -> Result<DMat4> {
        let (_, up, _) = self.camera_frame()?;
        Ok(DMat4::look_at_rh(self.position, self.look_at, up))
    }
}
