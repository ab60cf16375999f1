//! Is It Rick: configuration resolution
//!
//! Resolves the settings the is-it-rick application runs on: built-in defaults,
//! optional site-specific overrides, the data file paths derived from them, and
//! the static values shared with the browser client.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod status;
pub mod urls;

pub use crate::config::{
    ConfigLoader, DatabaseFiles, IsItRickConfig, OverrideSource, Settings,
    RICK_ROLLS_DISPLAYED, SESSION_ID_COOKIE_NAME, VERSION,
};
pub use crate::error::ApiError;
