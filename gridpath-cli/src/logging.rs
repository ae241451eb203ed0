//! Logger setup for the binary

use env_logger::Env;
use log::LevelFilter;

/// Install the global logger on stderr; `RUST_LOG` overrides `default_level`
pub fn init(default_level: LevelFilter) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level.as_str()))
        .format_timestamp(None)
        .init();
}
