//! CLI presentation: formatters for resolved configuration, paths and URLs.

use crate::config::{IsItRickConfig, OverrideSource};
use crate::error::ApiError;
use crate::urls::Urls;
use serde_json::json;

pub fn format_config_text(config: &IsItRickConfig) -> String {
    let settings = &config.settings;
    let rows = [
        ("PRODUCTION", settings.production.to_string()),
        ("BASE_URL", settings.base_url.clone()),
        (
            "DATABASE_DIRECTORY",
            settings.database_directory.display().to_string(),
        ),
        (
            "DATABASE_READ_INTERVAL",
            format!("{}s", settings.database_read_interval),
        ),
        ("TESTING_PORT", settings.testing_port.to_string()),
        (
            "SESSION_ID_DURATION",
            format!("{}s", settings.session_id_duration),
        ),
        (
            "RICK_ROLL_DATABASE_FILE",
            config.rick_roll_database_file().display().to_string(),
        ),
        (
            "USER_DATABASE_FILE",
            config.user_database_file().display().to_string(),
        ),
        (
            "SESSION_ID_DATABASE_FILE",
            config.session_id_database_file().display().to_string(),
        ),
        ("VERSION", config.version().to_string()),
        (
            "SESSION_ID_COOKIE_NAME",
            config.session_id_cookie_name().to_string(),
        ),
        (
            "RICK_ROLLS_DISPLAYED",
            config.rick_rolls_displayed().to_string(),
        ),
    ];

    let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(name, value)| format!("{:<width$}  {}", name, value, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_config_json(config: &IsItRickConfig) -> Result<String, ApiError> {
    let out = json!({
        "settings": config.settings,
        "database_files": config.database_files,
        "version": config.version(),
        "session_id_cookie_name": config.session_id_cookie_name(),
        "rick_rolls_displayed": config.rick_rolls_displayed(),
        "client_config": config.client_config(),
    });
    Ok(serde_json::to_string_pretty(&out)?)
}

/// Overridable settings only, in the shape of an override file.
pub fn format_config_toml(config: &IsItRickConfig) -> Result<String, ApiError> {
    Ok(toml::to_string_pretty(&config.settings)?)
}

pub fn format_paths_text(config: &IsItRickConfig) -> String {
    format!(
        "Database directory: {}\n  Rick rolls:  {}\n  Users:       {}\n  Session IDs: {}",
        config.database_directory().display(),
        config.rick_roll_database_file().display(),
        config.user_database_file().display(),
        config.session_id_database_file().display()
    )
}

pub fn format_urls_text(urls: &Urls) -> String {
    let entries = urls.entries();
    let width = entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    entries
        .iter()
        .map(|(name, url)| format!("{:<width$}  {}", name, url, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_urls_json(urls: &Urls) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(urls)?)
}

pub fn format_check_result(config: &IsItRickConfig, source: &OverrideSource) -> String {
    let origin = match source {
        OverrideSource::Absent => "built-in defaults (override disabled)".to_string(),
        OverrideSource::File(path) if path.is_file() => format!("{}", path.display()),
        OverrideSource::File(path) => {
            format!("built-in defaults ({} not found)", path.display())
        }
    };
    format!(
        "Configuration is valid:\n  Source: {}\n  Mode: {}\n  Data directory: {}",
        origin,
        if config.production() {
            "production"
        } else {
            "testing"
        },
        config.database_directory().display()
    )
}
