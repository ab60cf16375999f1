//! Shared helpers for integration tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// Write an override file into a fresh temp dir. Keep the TempDir alive while the path is used.
pub fn override_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("local_config.toml");
    std::fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

pub const FULL_OVERRIDE: &str = r#"
production = false
base_url = "/is_it_rick/"
database_directory = "/data"
database_read_interval = 3
testing_port = 8123
session_id_duration = 86400
"#;
