use log::LevelFilter;

/// Initialize the logger with the specified level.
///
/// `RUST_LOG` still takes precedence for individual modules.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
