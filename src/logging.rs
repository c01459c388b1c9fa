//! Logger setup for the `boggle` binary.

use log::LevelFilter;

/// Install an `env_logger` that prints bare messages.
///
/// `BOGGLE_DEBUG` (read by the binary) raises the default level from `Info`
/// to `Debug`, which turns on the per-search summaries. Directives in
/// `RUST_LOG` are applied on top of that default.
pub fn init_logger(debug_enabled: bool) {
    let default_level = match debug_enabled {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(default_level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);
    if let Ok(directives) = std::env::var("RUST_LOG") {
        builder.parse_filters(&directives);
    }

    // Tests and embedders may already have installed a logger.
    let _ = builder.try_init();
}
