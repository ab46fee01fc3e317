use colored::Colorize;
use env_logger::Builder;
use log::{Level, LevelFilter};
use std::io::Write;

/// Initialise the logger: dependencies at Warn, this crate at Info (Debug when `verbose`).
/// `RUST_LOG` is parsed last, so its directives override these defaults. Safe to call more than
/// once; later calls are ignored.
pub fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let _ = Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_CRATE_NAME"), level)
        .parse_default_env()
        .format(|buf, record| {
            let name = env!("CARGO_PKG_NAME").cyan();
            let line = match record.level() {
                Level::Error => format!("[{} {}] {}", name, "ERROR".red(), record.args()),
                Level::Warn => format!("[{} {}] {}", name, "WARN".yellow(), record.args()),
                Level::Debug | Level::Trace => format!(
                    "[{} {}] {}",
                    name,
                    record.target().white(),
                    record.args()
                ),
                Level::Info => format!("[{}] {}", name, record.args()),
            };
            writeln!(buf, "{}", line)
        })
        .try_init();
}
