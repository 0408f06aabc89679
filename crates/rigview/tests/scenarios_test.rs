//! End-to-end rig scenarios: the default twelve-camera ring around a
//! 100x240x100 box.

use rigview::*;

fn default_ring() -> RigConfig {
    RigConfig {
        ellipse_radius_x: 300.0,
        ellipse_radius_y: 300.0,
        num_of_cameras: 12,
        focal_length: 7.0,
        sensor_size: 16.0,
        camera_height: 120.0,
        ..RigConfig::default()
    }
}

#[test]
fn test_wide_lens_covers_target_from_every_camera() {
    let report = evaluate_rig(&default_ring()).expect("evaluation failed");

    let fov = report.intrinsics.fov_vertical_degrees;
    assert!((fov - 2.0 * (8.0_f64 / 7.0).atan().to_degrees()).abs() < 1e-9);
    assert!((fov - 97.63).abs() < 0.01);

    assert_eq!(report.look_at, DVec3::new(0.0, 120.0, 0.0));
    assert_eq!(report.target.min(), DVec3::new(-50.0, 0.0, -50.0));
    assert_eq!(report.target.max(), DVec3::new(50.0, 240.0, 50.0));

    assert_eq!(report.cameras.len(), 12);
    assert!(report.cameras.iter().all(|c| c.covered));
    assert_eq!(report.covered_count(), 12);
    assert!(report.all_covered());
}

#[test]
fn test_long_lens_covers_nothing() {
    let config = RigConfig {
        focal_length: 200.0,
        ..default_ring()
    };
    let report = evaluate_rig(&config).expect("evaluation failed");
    assert!((report.intrinsics.fov_vertical_degrees - 4.58).abs() < 0.01);
    assert_eq!(report.cameras.len(), 12);
    assert!(report.cameras.iter().all(|c| !c.covered));
    assert_eq!(report.covered_count(), 0);
}

#[test]
fn test_camera_positions_and_order() {
    let report = evaluate_rig(&default_ring()).expect("evaluation failed");
    for (i, camera) in report.cameras.iter().enumerate() {
        assert_eq!(camera.index, i);
        let theta = std::f64::consts::TAU * i as f64 / 12.0;
        let expected = DVec3::new(300.0 * theta.cos(), 120.0, 300.0 * theta.sin());
        assert!((camera.pose.position - expected).length() < 1e-9);
        assert_eq!(camera.frustum.apex(), camera.pose.position);
    }
}

#[test]
fn test_reevaluation_is_identical() {
    let config = default_ring();
    let first = evaluate_rig(&config).expect("evaluation failed");
    let second = evaluate_rig(&config).expect("evaluation failed");
    assert_eq!(first, second);
}

#[test]
fn test_user_fov_override() {
    let config = RigConfig {
        focal_length: 200.0,
        user_fov: Some(100.0),
        ..default_ring()
    };
    let report = evaluate_rig(&config).expect("evaluation failed");
    assert_eq!(report.intrinsics.fov_vertical_degrees, 100.0);
    assert!(report.all_covered());
}

#[test]
fn test_invalid_configs_fail_wholesale() {
    let zero_radius = RigConfig {
        ellipse_radius_x: 0.0,
        ..default_ring()
    };
    assert!(matches!(
        evaluate_rig(&zero_radius),
        Err(RigError::InvalidParameter(_))
    ));

    let bad_clip = RigConfig {
        near: 5.0,
        far: 1.0,
        ..default_ring()
    };
    assert!(matches!(
        evaluate_rig(&bad_clip),
        Err(RigError::InvalidParameter(_))
    ));
}

#[test]
fn test_pose_on_look_at_point_is_rejected() {
    let pose = CameraPose::looking_at(DVec3::new(0.0, 120.0, 0.0), DVec3::new(0.0, 120.0, 0.0));
    let intrinsics = CameraIntrinsics::from_config(&default_ring()).unwrap();
    assert!(matches!(
        build_frustum(&pose, &intrinsics),
        Err(RigError::InvalidPose(_))
    ));
}

#[test]
fn test_arc_length_spacing_on_circle_matches_parameter_spacing() {
    let param = evaluate_rig(&default_ring()).expect("evaluation failed");
    let arc = evaluate_rig(&RigConfig {
        spacing: Spacing::ArcLength,
        ..default_ring()
    })
    .expect("evaluation failed");
    for (a, b) in param.cameras.iter().zip(&arc.cameras) {
        assert!((a.pose.position - b.pose.position).length() < 1e-6);
        assert_eq!(a.covered, b.covered);
    }
}

#[test]
fn test_top_down_evaluation() {
    let report = evaluate_rig_2d(&default_ring()).expect("evaluation failed");
    assert_eq!(report.cameras.len(), 12);
    assert_eq!(report.look_at, DVec2::ZERO);
    assert_eq!(report.contained_count(), 12);
    assert_eq!(report.overlapping_count(), 12);

    let narrow = evaluate_rig_2d(&RigConfig {
        focal_length: 200.0,
        ..default_ring()
    })
    .expect("evaluation failed");
    assert_eq!(narrow.contained_count(), 0);
    assert_eq!(narrow.overlapping_count(), 12);
}

#[test]
fn test_config_from_json() {
    let json = serde_json::json!({
        "ellipseRadiusX": 400,
        "ellipseRadiusY": 250,
        "numOfCameras": 16,
        "focalLength": 10,
        "target": { "width": 80, "height": 200, "depth": 80 }
    })
    .to_string();
    let config = RigConfig::from_json_str(&json).expect("config parse failed");
    let report = evaluate_rig(&config).expect("evaluation failed");
    assert_eq!(report.cameras.len(), 16);
    assert_eq!(report.target.size(), DVec3::new(80.0, 200.0, 80.0));
    assert_eq!(report.layout.radius_y, 250.0);
}
