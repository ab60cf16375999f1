//! Config loader: builds the layered configuration and resolves it into an [`IsItRickConfig`].

use super::merge::merge_policy;
use super::sources::local_file;
use super::{IsItRickConfig, OverrideSource, Settings};
use crate::error::ApiError;
use std::path::Path;
use tracing::{debug, info, warn};

/// Entry point for resolving configuration.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Resolve configuration, falling back to built-in defaults whenever the
    /// override source is absent or unusable. Never fails.
    pub fn load(source: &OverrideSource) -> IsItRickConfig {
        match Self::resolve_settings(source) {
            Ok(settings) => IsItRickConfig::from_settings(settings),
            Err(e) => {
                warn!(
                    error = %e,
                    "Failed to read override settings, using built-in defaults"
                );
                IsItRickConfig::default()
            }
        }
    }

    /// Resolve configuration, surfacing malformed override files and invalid values.
    /// A missing override file is not an error.
    pub fn load_strict(source: &OverrideSource) -> Result<IsItRickConfig, ApiError> {
        let config = IsItRickConfig::from_settings(Self::resolve_settings(source)?);
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration from an override file that must exist.
    pub fn load_from_file(path: &Path) -> Result<IsItRickConfig, ApiError> {
        if !path.is_file() {
            return Err(ApiError::OverrideNotFound(path.to_path_buf()));
        }
        Self::load_strict(&OverrideSource::File(path.to_path_buf()))
    }

    fn resolve_settings(source: &OverrideSource) -> Result<Settings, ApiError> {
        let mut builder = merge_policy::builder_with_defaults()?;

        match source {
            OverrideSource::Absent => {
                debug!("No override source configured, using built-in defaults");
            }
            OverrideSource::File(path) => {
                if path.is_file() {
                    local_file::check_value_types(path)?;
                }
                builder = local_file::add_to_builder(builder, path);
            }
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        info!(
            production = settings.production,
            base_url = %settings.base_url,
            database_directory = %settings.database_directory.display(),
            "Configuration resolved"
        );
        Ok(settings)
    }
}
