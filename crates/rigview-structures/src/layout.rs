//! Camera placement on an ellipse.
//!
//! Cameras sit on a horizontal ellipse at a fixed height and all aim at a
//! common point. With [`Spacing::Parameter`] camera `i` of `n` sits at
//! parameter angle `2πi/n`, which is evenly spaced in angle but not in arc
//! length unless the radii are equal. [`Spacing::ArcLength`] evens out the
//! arc length instead.

use std::f64::consts::TAU;

use glam::{DVec2, DVec3};
use rigview_core::{Result, RigConfig, RigError, Spacing};

use crate::camera_view::CameraPose;

/// Number of samples in the arc-length table used by [`Spacing::ArcLength`].
const ARC_LENGTH_SAMPLES: usize = 2048;

/// A horizontal ring of cameras.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseLayout {
    /// Radius along X.
    pub radius_x: f64,
    /// Radius along Z.
    pub radius_y: f64,
    /// Number of cameras.
    pub count: usize,
    /// Height of the ring above `center`.
    pub height: f64,
    /// Center of the ellipse on the ground.
    pub center: DVec3,
    /// Distribution of cameras along the ellipse.
    pub spacing: Spacing,
}

impl EllipseLayout {
    /// Creates a layout centered at the origin with parameter-angle spacing.
    pub fn new(radius_x: f64, radius_y: f64, count: usize, height: f64) -> Self {
        Self {
            radius_x,
            radius_y,
            count,
            height,
            center: DVec3::ZERO,
            spacing: Spacing::Parameter,
        }
    }

    /// Returns the layout described by a rig configuration.
    pub fn from_config(config: &RigConfig) -> Self {
        Self::new(
            config.ellipse_radius_x,
            config.ellipse_radius_y,
            config.num_of_cameras,
            config.camera_height,
        )
        .with_spacing(config.spacing)
    }

    /// Sets the ellipse center.
    #[must_use]
    pub fn with_center(mut self, center: DVec3) -> Self {
        self.center = center;
        self
    }

    /// Sets the camera distribution.
    #[must_use]
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Checks that both radii are positive and the placement is finite.
    pub fn validate(&self) -> Result<()> {
        for (name, radius) in [("radiusX", self.radius_x), ("radiusY", self.radius_y)] {
            if !(radius.is_finite() && radius > 0.0) {
                return Err(RigError::InvalidParameter(format!(
                    "ellipse {name} must be positive, got {radius}"
                )));
            }
        }
        if !self.height.is_finite() || !self.center.is_finite() {
            return Err(RigError::InvalidParameter(format!(
                "ellipse placement must be finite, got height={} center={}",
                self.height, self.center
            )));
        }
        Ok(())
    }

    /// Returns the point on the ring at parameter angle `theta`.
    pub fn point_at(&self, theta: f64) -> DVec3 {
        let (sin, cos) = theta.sin_cos();
        self.center + DVec3::new(self.radius_x * cos, self.height, self.radius_y * sin)
    }

    /// Returns the parameter angle in `[0, 2π)` of a point on (or near) the ring.
    pub fn parameter_angle(&self, point: DVec3) -> f64 {
        let local = point - self.center;
        (local.z / self.radius_y)
            .atan2(local.x / self.radius_x)
            .rem_euclid(TAU)
    }

    /// Returns `segments + 1` points tracing the ring; the last repeats the first.
    pub fn outline(&self, segments: usize) -> Vec<DVec3> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(TAU * i as f64 / segments as f64))
            .collect()
    }

    /// Returns the parameter angle of every camera, in placement order.
    pub fn camera_angles(&self) -> Result<Vec<f64>> {
        self.validate()?;
        let n = self.count;
        let angles = match self.spacing {
            Spacing::Parameter => (0..n).map(|i| TAU * i as f64 / n as f64).collect(),
            Spacing::ArcLength => {
                let table = ArcLengthTable::new(self.radius_x, self.radius_y);
                (0..n)
                    .map(|i| table.angle_at_fraction(i as f64 / n as f64))
                    .collect()
            }
        };
        Ok(angles)
    }
}

/// Cumulative arc length of the ellipse sampled at evenly spaced parameter angles.
struct ArcLengthTable {
    cumulative: Vec<f64>,
}

impl ArcLengthTable {
    fn new(radius_x: f64, radius_y: f64) -> Self {
        let step = TAU / ARC_LENGTH_SAMPLES as f64;
        let speed = |t: f64| {
            let (sin, cos) = t.sin_cos();
            (radius_x * radius_x * sin * sin + radius_y * radius_y * cos * cos).sqrt()
        };
        let mut cumulative = Vec::with_capacity(ARC_LENGTH_SAMPLES + 1);
        cumulative.push(0.0);
        let mut total = 0.0;
        for k in 0..ARC_LENGTH_SAMPLES {
            let a = step * k as f64;
            let b = a + step;
            // Simpson's rule on each sample interval.
            total += step / 6.0 * (speed(a) + 4.0 * speed((a + b) / 2.0) + speed(b));
            cumulative.push(total);
        }
        Self { cumulative }
    }

    fn perimeter(&self) -> f64 {
        self.cumulative[ARC_LENGTH_SAMPLES]
    }

    /// Inverts the table: the parameter angle at which `fraction` of the perimeter is reached.
    fn angle_at_fraction(&self, fraction: f64) -> f64 {
        let target = fraction * self.perimeter();
        let upper = self
            .cumulative
            .partition_point(|&s| s < target)
            .clamp(1, ARC_LENGTH_SAMPLES);
        let (s0, s1) = (self.cumulative[upper - 1], self.cumulative[upper]);
        let t = if s1 > s0 { (target - s0) / (s1 - s0) } else { 0.0 };
        TAU * ((upper - 1) as f64 + t) / ARC_LENGTH_SAMPLES as f64
    }
}

/// Generates the camera poses of a layout, each aimed at `look_at` with +Y up.
///
/// Returns `layout.count` poses in placement order; an empty layout yields
/// no poses. Fails with `InvalidParameter` if a radius is not positive.
pub fn generate_poses(layout: &EllipseLayout, look_at: DVec3) -> Result<Vec<CameraPose>> {
    let poses: Vec<CameraPose> = layout
        .camera_angles()?
        .into_iter()
        .map(|theta| CameraPose::looking_at(layout.point_at(theta), look_at))
        .collect();
    log::debug!(
        "generated {} camera poses on a {}x{} ellipse ({:?} spacing)",
        poses.len(),
        layout.radius_x,
        layout.radius_y,
        layout.spacing
    );
    Ok(poses)
}

/// Generates the top-down `(x, z)` camera positions of a layout.
pub fn generate_positions_2d(layout: &EllipseLayout) -> Result<Vec<DVec2>> {
    Ok(layout
        .camera_angles()?
        .into_iter()
        .map(|theta| {
            let p = layout.point_at(theta);
            DVec2::new(p.x, p.z)
        })
        .collect())
}
