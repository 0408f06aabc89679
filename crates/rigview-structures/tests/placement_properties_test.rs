//! Property tests for pose generation, frustum containment and coverage.

use std::f64::consts::TAU;

use glam::DVec3;
use proptest::prelude::*;
use rigview_core::TargetVolume;
use rigview_structures::{
    build_frustum, evaluate_coverage, generate_poses, CameraIntrinsics, CameraPose, EllipseLayout,
};

fn angle_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}

proptest! {
    #[test]
    fn poses_are_evenly_spaced_in_parameter_angle(
        radius_x in 0.5f64..1000.0,
        radius_y in 0.5f64..1000.0,
        count in 1usize..200,
        height in -100.0f64..500.0,
    ) {
        let layout = EllipseLayout::new(radius_x, radius_y, count, height);
        let look_at = DVec3::new(0.0, height, 0.0);
        let poses = generate_poses(&layout, look_at).unwrap();
        prop_assert_eq!(poses.len(), count);
        for (i, pose) in poses.iter().enumerate() {
            let expected = TAU * i as f64 / count as f64;
            prop_assert!(angle_distance(layout.parameter_angle(pose.position), expected) < 1e-9);
            prop_assert!((pose.position.y - height).abs() < 1e-9);
            prop_assert_eq!(pose.look_at, look_at);
        }
    }

    #[test]
    fn pose_generation_is_deterministic(
        radius_x in 0.5f64..1000.0,
        radius_y in 0.5f64..1000.0,
        count in 0usize..64,
    ) {
        let layout = EllipseLayout::new(radius_x, radius_y, count, 10.0);
        let a = generate_poses(&layout, DVec3::ZERO).unwrap();
        let b = generate_poses(&layout, DVec3::ZERO).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn points_behind_camera_are_outside(
        x in -50.0f64..50.0,
        y in -50.0f64..50.0,
        z in -50.0f64..50.0,
        behind in 0.0f64..1000.0,
        fov in 1.0f64..179.0,
        aspect in 0.1f64..4.0,
    ) {
        let position = DVec3::new(x, y, z);
        let pose = CameraPose::looking_at(position, position + DVec3::new(1.0, 0.2, -0.5));
        let intrinsics = CameraIntrinsics::new(fov, aspect, 0.5, 100.0).unwrap();
        let frustum = build_frustum(&pose, &intrinsics).unwrap();
        let forward = pose.forward().unwrap();
        prop_assert!(!frustum.contains_point(position - forward * behind));
    }

    #[test]
    fn centered_small_box_is_contained(
        depth in 2.0f64..90.0,
        fov in 10.0f64..170.0,
        aspect in 0.25f64..4.0,
        scale in 0.05f64..0.9,
    ) {
        let pose = CameraPose::looking_at(DVec3::new(0.0, 0.0, 100.0), DVec3::ZERO);
        let intrinsics = CameraIntrinsics::new(fov, aspect, 1.0, 100.0).unwrap();
        let frustum = build_frustum(&pose, &intrinsics).unwrap();

        // Half extents fit inside the cross-section at the box's nearest depth.
        let half_v = intrinsics.half_vertical_radians().tan();
        let half_depth = (depth - 1.0).min(99.0 - depth) * scale * 0.5;
        let nearest = depth - half_depth;
        let half = DVec3::new(
            half_v * aspect * nearest * scale,
            half_v * nearest * scale,
            half_depth,
        );
        let center = DVec3::new(0.0, 0.0, 100.0 - depth);
        let target = TargetVolume::from_center_half_extents(center, half).unwrap();
        prop_assert!(frustum.contains_box(&target));
        for corner in target.corners() {
            prop_assert!(frustum.contains_point(corner));
        }
    }

    #[test]
    fn coverage_is_idempotent(
        radius in 50.0f64..500.0,
        count in 1usize..32,
        fov in 5.0f64..120.0,
    ) {
        let layout = EllipseLayout::new(radius, radius * 0.75, count, 120.0);
        let poses = generate_poses(&layout, DVec3::new(0.0, 120.0, 0.0)).unwrap();
        let intrinsics = CameraIntrinsics::new(fov, 16.0 / 9.0, 1.0, 2000.0).unwrap();
        let target = TargetVolume::on_ground(100.0, 240.0, 100.0).unwrap();
        let first = evaluate_coverage(&poses, &intrinsics, &target).unwrap();
        let second = evaluate_coverage(&poses, &intrinsics, &target).unwrap();
        prop_assert_eq!(first, second);
    }
}
