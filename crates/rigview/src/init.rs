//! Logging setup for rigview.

/// Initializes logging for rigview.
///
/// Installs an `env_logger` backend that honours `RUST_LOG`, defaulting to
/// `info`. Calling this more than once, or after another logger has been
/// installed, is harmless.
///
/// # Example
///
/// ```no_run
/// rigview::init();
/// let report = rigview::evaluate_rig(&rigview::RigConfig::default()).unwrap();
/// log::info!("{} cameras cover the target", report.covered_count());
/// ```
pub fn init() {
    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    if result.is_ok() {
        log::info!("rigview initialized");
    }
}
