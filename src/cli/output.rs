//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::OverrideNotFound(path) => format!(
            "Override file not found: {}\nPass --no-override to run on built-in defaults.",
            path.display()
        ),
        other => other.to_string(),
    }
}
