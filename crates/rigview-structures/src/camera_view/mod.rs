//! Camera view structure for handing camera poses to a renderer.

mod camera_parameters;

pub use camera_parameters::*;

use glam::DVec3;
use rigview_core::Result;

use crate::coverage::CoverageResult;
use crate::frustum::{build_frustum, Frustum};

/// A named camera with its frustum, ready to be drawn as a wireframe.
#[derive(Debug, Clone)]
pub struct CameraView {
    name: String,
    pose: CameraPose,
    frustum: Frustum,
    covered: Option<bool>,
}

impl CameraView {
    /// Creates a camera view, building its frustum from the pose and intrinsics.
    pub fn new(
        name: impl Into<String>,
        pose: CameraPose,
        intrinsics: &CameraIntrinsics,
    ) -> Result<Self> {
        let frustum = build_frustum(&pose, intrinsics)?;
        Ok(Self {
            name: name.into(),
            pose,
            frustum,
            covered: None,
        })
    }

    /// Creates a camera view from an evaluated coverage result.
    pub fn from_coverage(name: impl Into<String>, result: &CoverageResult) -> Self {
        Self {
            name: name.into(),
            pose: result.pose,
            frustum: result.frustum.clone(),
            covered: Some(result.covered),
        }
    }

    /// Returns the name of this view.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the camera pose.
    #[must_use]
    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// Gets the camera frustum.
    #[must_use]
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// Returns whether the target was covered, if this view came from an evaluation.
    #[must_use]
    pub fn covered(&self) -> Option<bool> {
        self.covered
    }

    /// Generates the frustum wireframe geometry.
    ///
    /// Nodes are the apex, the near quad and the far quad; edges connect the
    /// apex to the near quad, close both quads and join them.
    #[must_use]
    pub fn wireframe(&self) -> (Vec<DVec3>, Vec<[u32; 2]>) {
        let mut nodes = Vec::with_capacity(9);
        nodes.push(self.frustum.apex()); // 0
        nodes.extend_from_slice(self.frustum.corners()); // 1-4 near, 5-8 far

        let mut edges = Vec::with_capacity(16);
        for i in 0..4u32 {
            let next = (i + 1) % 4;
            // From apex to near corners
            edges.push([0, 1 + i]);
            // Near rectangle
            edges.push([1 + i, 1 + next]);
            // Far rectangle
            edges.push([5 + i, 5 + next]);
            // Near to far
            edges.push([1 + i, 5 + i]);
        }

        (nodes, edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_view() -> CameraView {
        let pose = CameraPose::looking_at(DVec3::new(0.0, 0.0, 5.0), DVec3::ZERO);
        let intrinsics = CameraIntrinsics::new(60.0, 1.5, 0.5, 10.0).unwrap();
        CameraView::new("cam", pose, &intrinsics).unwrap()
    }

    #[test]
    fn test_camera_view_creation() {
        let view = test_view();
        assert_eq!(view.name(), "cam");
        assert_eq!(view.frustum().apex(), DVec3::new(0.0, 0.0, 5.0));
        assert_eq!(view.covered(), None);
    }

    #[test]
    fn test_wireframe() {
        let view = test_view();
        let (nodes, edges) = view.wireframe();
        assert_eq!(nodes.len(), 9);
        assert_eq!(edges.len(), 16);
        for edge in &edges {
            assert!(edge.iter().all(|&i| (i as usize) < nodes.len()));
            assert_ne!(edge[0], edge[1]);
        }
        // Near quad sits at the near distance along the look direction.
        for node in &nodes[1..5] {
            assert!((node.z - 4.5).abs() < 1e-12);
        }
        for node in &nodes[5..9] {
            assert!((node.z + 5.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_degenerate_view_fails() {
        let pose = CameraPose::looking_at(DVec3::ONE, DVec3::ONE);
        let intrinsics = CameraIntrinsics::new(60.0, 1.5, 0.5, 10.0).unwrap();
        assert!(CameraView::new("bad", pose, &intrinsics).is_err());
    }
}
