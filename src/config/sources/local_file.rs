//! Local override file source: a TOML file holding any of the overridable settings.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::File;
use config::FileFormat;
use crate::config::Settings;
use crate::error::ApiError;
use std::path::Path;
use tracing::debug;

/// Check that the file's values have the exact types the settings declare.
///
/// The `config` layer coerces values (a float becomes a rounded integer), so the
/// file is parsed on its own first and any type mismatch is reported.
pub fn check_value_types(path: &Path) -> Result<(), ApiError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ApiError::ConfigError(format!(
            "Failed to read override file {}: {}",
            path.display(),
            e
        ))
    })?;
    toml::from_str::<Settings>(&contents).map_err(|e| {
        ApiError::ConfigError(format!(
            "Invalid override file {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(())
}

/// Add the override file to the builder if it exists. A missing file adds nothing.
///
/// The format is fixed to TOML so the file name does not need an extension.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>, path: &Path) -> ConfigBuilder<DefaultState> {
    if !path.is_file() {
        debug!(
            override_path = %path.display(),
            "No override file found, keeping built-in defaults"
        );
        return builder;
    }

    debug!(override_path = %path.display(), "Adding override file");
    builder.add_source(File::from(path).format(FileFormat::Toml).required(true))
}
