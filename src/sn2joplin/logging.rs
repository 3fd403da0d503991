use log::LevelFilter;

/// environment variable that overrides the level per module, env_logger syntax
pub const LOG_ENV: &str = "SN2JOPLIN_LOG";

/// Install the stderr logger at `level`.
///
/// Calling this again, or after some other logger is installed, does nothing.
pub fn init(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_env(LOG_ENV)
        .format_timestamp(None)
        .format_target(true)
        .try_init();
}
