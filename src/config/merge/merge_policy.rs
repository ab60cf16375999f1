//! Merge rules: defaults first, then override sources in order; later sources win per key.

use crate::config::{
    DEFAULT_BASE_URL, DEFAULT_DATABASE_DIRECTORY, DEFAULT_DATABASE_READ_INTERVAL_SECS,
    DEFAULT_PRODUCTION, DEFAULT_SESSION_ID_DURATION_SECS, DEFAULT_TESTING_PORT,
};
use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("production", DEFAULT_PRODUCTION)?
        .set_default("base_url", DEFAULT_BASE_URL)?
        .set_default("database_directory", DEFAULT_DATABASE_DIRECTORY)?
        .set_default(
            "database_read_interval",
            DEFAULT_DATABASE_READ_INTERVAL_SECS as i64,
        )?
        .set_default("testing_port", DEFAULT_TESTING_PORT as i64)?
        .set_default("session_id_duration", DEFAULT_SESSION_ID_DURATION_SECS as i64)
}
