// Separate test binary: the global logger can only be installed once per process.

use apodwall::utils::setup_logging;
use log::Level;

// --- RUST_LOG precedence ---

#[test]
fn test_rust_log_overrides_crate_level() {
    // SAFETY: the only test in this binary, so no other thread reads the environment.
    unsafe { std::env::set_var("RUST_LOG", "apodwall=trace") };
    setup_logging(false);
    assert!(log::log_enabled!(target: "apodwall::parse", Level::Trace));
    assert!(!log::log_enabled!(target: "ureq", Level::Info));
}
