//! Logger setup for the command-line tool

use log::LevelFilter;
use std::env;

/// Initialize `env_logger`
///
/// Uses `Debug` when `debug_enabled` is set and `Info` otherwise. An explicit
/// `RUST_LOG` overrides both. Calling this twice is harmless.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
