//! Rig demo.
//!
//! Evaluates a camera ring and logs, per camera, where it sits and whether it
//! sees the whole target. Pass a JSON config path to override the defaults:
//!
//! ```sh
//! RUST_LOG=info cargo run --example rig_demo -- rig.json
//! ```

use rigview::*;

fn main() -> Result<()> {
    init();

    let config = match std::env::args().nth(1) {
        Some(path) => RigConfig::load(path)?,
        None => RigConfig::default(),
    };

    let report = evaluate_rig(&config)?;
    log::info!(
        "lens: {:.2} deg vertical, {:.2} deg horizontal",
        report.intrinsics.fov_vertical_degrees,
        report.intrinsics.horizontal_fov_degrees()
    );
    for view in report.views() {
        let (nodes, edges) = view.wireframe();
        let position = view.pose().position;
        log::info!(
            "{}: ({:.1}, {:.1}, {:.1}) {} [{} nodes, {} edges]",
            view.name(),
            position.x,
            position.y,
            position.z,
            if view.covered() == Some(true) {
                "covers target"
            } else {
                "misses target"
            },
            nodes.len(),
            edges.len()
        );
    }

    let top_down = evaluate_rig_2d(&config)?;
    for camera in &top_down.cameras {
        log::info!(
            "top-down camera {}: contained={} overlaps={}",
            camera.index,
            camera.contained,
            camera.overlaps
        );
    }

    Ok(())
}
