//! Target volumes observed by the camera rig.

use glam::{DVec2, DVec3};

use crate::error::{ensure_finite, RigError, Result};

/// An axis-aligned box that the cameras should see in full.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetVolume {
    min: DVec3,
    max: DVec3,
}

impl TargetVolume {
    /// Creates a box from its minimum and maximum corners.
    ///
    /// Fails if any coordinate is not finite or `min > max` on any axis.
    pub fn new(min: DVec3, max: DVec3) -> Result<Self> {
        for (name, v) in [("min", min), ("max", max)] {
            if !v.is_finite() {
                return Err(RigError::InvalidParameter(format!(
                    "target {name} corner must be finite, got {v}"
                )));
            }
        }
        if min.cmpgt(max).any() {
            return Err(RigError::InvalidParameter(format!(
                "target min {min} exceeds max {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Creates a box from its center and half extents.
    pub fn from_center_half_extents(center: DVec3, half_extents: DVec3) -> Result<Self> {
        if half_extents.cmplt(DVec3::ZERO).any() {
            return Err(RigError::InvalidParameter(format!(
                "target half extents must be non-negative, got {half_extents}"
            )));
        }
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a box standing on the `y = 0` ground plane, centered on the Y axis.
    ///
    /// `width` spans X, `height` spans Y and `depth` spans Z.
    pub fn on_ground(width: f64, height: f64, depth: f64) -> Result<Self> {
        let size = DVec3::new(width, height, depth);
        Self::from_center_half_extents(DVec3::new(0.0, height / 2.0, 0.0), size / 2.0)
    }

    /// Returns the minimum corner.
    pub fn min(&self) -> DVec3 {
        self.min
    }

    /// Returns the maximum corner.
    pub fn max(&self) -> DVec3 {
        self.max
    }

    /// Returns the center of the box.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the edge lengths of the box.
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Returns the half extents of the box.
    pub fn half_extents(&self) -> DVec3 {
        self.size() * 0.5
    }

    /// Returns the eight corners of the box.
    ///
    /// Bit 0 of the index selects max X, bit 1 max Y, bit 2 max Z.
    pub fn corners(&self) -> [DVec3; 8] {
        std::array::from_fn(|i| {
            DVec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        })
    }

    /// Returns the top-down footprint of the box on the X/Z plane.
    pub fn footprint(&self) -> Rect {
        Rect {
            min: DVec2::new(self.min.x, self.min.z),
            max: DVec2::new(self.max.x, self.max.z),
        }
    }
}

/// An axis-aligned rectangle, the top-down counterpart of [`TargetVolume`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    min: DVec2,
    max: DVec2,
}

impl Rect {
    /// Creates a rectangle from its minimum and maximum corners.
    pub fn new(min: DVec2, max: DVec2) -> Result<Self> {
        ensure_finite("rect min.x", min.x)?;
        ensure_finite("rect min.y", min.y)?;
        ensure_finite("rect max.x", max.x)?;
        ensure_finite("rect max.y", max.y)?;
        if min.cmpgt(max).any() {
            return Err(RigError::InvalidParameter(format!(
                "rect min {min} exceeds max {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Creates a rectangle of the given size centered on `center`.
    pub fn from_center_size(center: DVec2, width: f64, height: f64) -> Result<Self> {
        if width < 0.0 || height < 0.0 {
            return Err(RigError::InvalidParameter(format!(
                "rect size must be non-negative, got {width}x{height}"
            )));
        }
        let half = DVec2::new(width, height) / 2.0;
        Self::new(center - half, center + half)
    }

    /// Returns the minimum corner.
    pub fn min(&self) -> DVec2 {
        self.min
    }

    /// Returns the maximum corner.
    pub fn max(&self) -> DVec2 {
        self.max
    }

    /// Returns the center of the rectangle.
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Returns the four corners in counter-clockwise order starting at `min`.
    pub fn corners(&self) -> [DVec2; 4] {
        [
            self.min,
            DVec2::new(self.max.x, self.min.y),
            self.max,
            DVec2::new(self.min.x, self.max.y),
        ]
    }
}
