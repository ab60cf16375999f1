//! CLI route: single route table and run context. Dispatches to the config loader and presentation.

use crate::cli::parse::{Cli, Commands, OutputFormat};
use crate::cli::presentation::{
    format_check_result, format_config_json, format_config_text, format_config_toml,
    format_paths_text, format_urls_json, format_urls_text,
};
use crate::config::{ConfigLoader, IsItRickConfig, OverrideSource};
use crate::error::ApiError;
use tracing::{debug, info};

/// Runtime context for CLI execution: the override source and the configuration resolved from it.
pub struct RunContext {
    source: OverrideSource,
    explicit_source: bool,
    config: IsItRickConfig,
}

impl RunContext {
    /// Resolve configuration the way the CLI flags ask for.
    ///
    /// An explicit `--config` path must exist; the default location may be missing.
    pub fn new(cli: &Cli) -> Result<Self, ApiError> {
        let explicit_source = cli.config.is_some();
        let source = if cli.no_override {
            OverrideSource::Absent
        } else {
            cli.config
                .clone()
                .map(OverrideSource::File)
                .unwrap_or_default()
        };
        debug!(?source, strict = cli.strict, "Resolving configuration");

        let config = Self::resolve(&source, explicit_source, cli.strict)?;
        Ok(Self {
            source,
            explicit_source,
            config,
        })
    }

    fn resolve(
        source: &OverrideSource,
        explicit_source: bool,
        strict: bool,
    ) -> Result<IsItRickConfig, ApiError> {
        match source {
            OverrideSource::File(path) if explicit_source => {
                if strict {
                    ConfigLoader::load_from_file(path)
                } else if path.is_file() {
                    Ok(ConfigLoader::load(source))
                } else {
                    Err(ApiError::OverrideNotFound(path.clone()))
                }
            }
            _ if strict => ConfigLoader::load_strict(source),
            _ => Ok(ConfigLoader::load(source)),
        }
    }

    pub fn config(&self) -> &IsItRickConfig {
        &self.config
    }

    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        info!(command = command_name(command), "Executing command");
        match command {
            Commands::Show { format } => match format {
                OutputFormat::Text => Ok(format_config_text(&self.config)),
                OutputFormat::Json => format_config_json(&self.config),
                OutputFormat::Toml => format_config_toml(&self.config),
            },
            Commands::Paths => Ok(format_paths_text(&self.config)),
            Commands::Urls { format } => {
                let urls = self.config.urls();
                match format {
                    OutputFormat::Text => Ok(format_urls_text(&urls)),
                    OutputFormat::Json => format_urls_json(&urls),
                    OutputFormat::Toml => Ok(toml::to_string_pretty(&urls)?),
                }
            }
            Commands::Check => {
                let checked = Self::resolve(&self.source, self.explicit_source, true)?;
                Ok(format_check_result(&checked, &self.source))
            }
        }
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Show { .. } => "show",
        Commands::Paths => "paths",
        Commands::Urls { .. } => "urls",
        Commands::Check => "check",
    }
}
