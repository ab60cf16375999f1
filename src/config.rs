//! Configuration System
//!
//! Resolves the application's configuration once at startup: built-in defaults,
//! optionally overridden field by field from a local TOML file, plus the database
//! file paths derived from the data directory and a handful of static constants.
//! The resolved [`IsItRickConfig`] is immutable and is handed to the components
//! that need it.

use crate::error::{ApiError, ValidationError};
use crate::urls::{ClientConfig, Urls};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Application version reported to clients.
pub const VERSION: &str = "1.1.0";

/// Name of the cookie carrying the session identifier.
pub const SESSION_ID_COOKIE_NAME: &str = "isItRickSessionId";

/// How many rick rolls are displayed on the management page.
pub const RICK_ROLLS_DISPLAYED: usize = 10;

pub const DEFAULT_PRODUCTION: bool = true;
pub const DEFAULT_BASE_URL: &str = "/";
pub const DEFAULT_DATABASE_DIRECTORY: &str = "/var/www/is_it_rick_data/";
pub const DEFAULT_DATABASE_READ_INTERVAL_SECS: u64 = 1;
pub const DEFAULT_TESTING_PORT: u16 = 5000;
/// One week.
pub const DEFAULT_SESSION_ID_DURATION_SECS: u64 = 60 * 60 * 24 * 7;

pub const RICK_ROLL_DATABASE_FILENAME: &str = "rick_rolls.json";
pub const USER_DATABASE_FILENAME: &str = "users.json";
pub const SESSION_ID_DATABASE_FILENAME: &str = "session_ids.json";

/// Default location of the site-specific override file, relative to the working directory.
pub const DEFAULT_OVERRIDE_FILE: &str = "local_config.toml";

/// The six values a deployment may override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether the app runs in production mode
    pub production: bool,

    /// URL path prefix the app is mounted under
    pub base_url: String,

    /// Directory holding the JSON data files
    pub database_directory: PathBuf,

    /// Seconds between re-reads of the data files
    pub database_read_interval: u64,

    /// Port used for non-production runs
    pub testing_port: u16,

    /// Seconds a session identifier stays valid
    pub session_id_duration: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            production: DEFAULT_PRODUCTION,
            base_url: DEFAULT_BASE_URL.to_string(),
            database_directory: PathBuf::from(DEFAULT_DATABASE_DIRECTORY),
            database_read_interval: DEFAULT_DATABASE_READ_INTERVAL_SECS,
            testing_port: DEFAULT_TESTING_PORT,
            session_id_duration: DEFAULT_SESSION_ID_DURATION_SECS,
        }
    }
}

impl Settings {
    /// Check the settings for values the rest of the app cannot work with.
    /// Collects every problem rather than stopping at the first.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            errors.push(ValidationError::BaseUrl(self.base_url.clone()));
        }
        if self.database_directory.as_os_str().is_empty() {
            errors.push(ValidationError::EmptyDatabaseDirectory);
        }
        if self.database_read_interval == 0 {
            errors.push(ValidationError::ZeroDuration("database_read_interval"));
        }
        if self.session_id_duration == 0 {
            errors.push(ValidationError::ZeroDuration("session_id_duration"));
        }
        if self.testing_port == 0 {
            errors.push(ValidationError::ZeroPort);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Paths of the JSON files that back the app's data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseFiles {
    pub rick_rolls: PathBuf,
    pub users: PathBuf,
    pub session_ids: PathBuf,
}

impl DatabaseFiles {
    /// Derive the data file paths under `directory`.
    pub fn under(directory: &Path) -> Self {
        Self {
            rick_rolls: directory.join(RICK_ROLL_DATABASE_FILENAME),
            users: directory.join(USER_DATABASE_FILENAME),
            session_ids: directory.join(SESSION_ID_DATABASE_FILENAME),
        }
    }
}

/// Where override settings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideSource {
    /// No override; built-in defaults only
    Absent,
    /// A TOML file that may or may not exist
    File(PathBuf),
}

impl OverrideSource {
    /// `local_config.toml` in the working directory.
    pub fn default_location() -> Self {
        OverrideSource::File(PathBuf::from(DEFAULT_OVERRIDE_FILE))
    }
}

impl Default for OverrideSource {
    fn default() -> Self {
        Self::default_location()
    }
}

/// Fully resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IsItRickConfig {
    pub settings: Settings,
    pub database_files: DatabaseFiles,
}

impl Default for IsItRickConfig {
    fn default() -> Self {
        Self::from_settings(Settings::default())
    }
}

impl IsItRickConfig {
    /// Build the configuration from resolved settings, deriving the data file paths.
    pub fn from_settings(settings: Settings) -> Self {
        let database_files = DatabaseFiles::under(&settings.database_directory);
        Self {
            settings,
            database_files,
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        self.settings.validate().map_err(ApiError::ValidationFailed)
    }

    pub fn production(&self) -> bool {
        self.settings.production
    }

    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    pub fn database_directory(&self) -> &Path {
        &self.settings.database_directory
    }

    pub fn database_read_interval(&self) -> Duration {
        Duration::from_secs(self.settings.database_read_interval)
    }

    pub fn testing_port(&self) -> u16 {
        self.settings.testing_port
    }

    pub fn session_id_duration(&self) -> Duration {
        Duration::from_secs(self.settings.session_id_duration)
    }

    pub fn rick_roll_database_file(&self) -> &Path {
        &self.database_files.rick_rolls
    }

    pub fn user_database_file(&self) -> &Path {
        &self.database_files.users
    }

    pub fn session_id_database_file(&self) -> &Path {
        &self.database_files.session_ids
    }

    pub fn version(&self) -> &'static str {
        VERSION
    }

    pub fn session_id_cookie_name(&self) -> &'static str {
        SESSION_ID_COOKIE_NAME
    }

    pub fn rick_rolls_displayed(&self) -> usize {
        RICK_ROLLS_DISPLAYED
    }

    /// Route URLs the browser client builds from the base URL.
    pub fn urls(&self) -> Urls {
        Urls::from_base_url(&self.settings.base_url)
    }

    /// Config object served to the browser client.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.settings.base_url)
    }
}
