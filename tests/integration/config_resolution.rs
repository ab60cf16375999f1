//! Integration tests for layered configuration resolution

use is_it_rick::config::{ConfigLoader, IsItRickConfig, OverrideSource, Settings};
use is_it_rick::{ApiError, RICK_ROLLS_DISPLAYED, SESSION_ID_COOKIE_NAME, VERSION};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::integration::test_utils::{override_file, FULL_OVERRIDE};

#[test]
fn test_no_override_gives_documented_defaults() {
    let config = ConfigLoader::load(&OverrideSource::Absent);

    assert!(config.production());
    assert_eq!(config.base_url(), "/");
    assert_eq!(
        config.database_directory(),
        Path::new("/var/www/is_it_rick_data/")
    );
    assert_eq!(config.database_read_interval(), Duration::from_secs(1));
    assert_eq!(config.testing_port(), 5000);
    assert_eq!(
        config.session_id_duration(),
        Duration::from_secs(60 * 60 * 24 * 7)
    );
    assert_eq!(
        config.rick_roll_database_file(),
        Path::new("/var/www/is_it_rick_data/rick_rolls.json")
    );
    assert_eq!(
        config.user_database_file(),
        Path::new("/var/www/is_it_rick_data/users.json")
    );
    assert_eq!(
        config.session_id_database_file(),
        Path::new("/var/www/is_it_rick_data/session_ids.json")
    );
    assert_eq!(config.version(), "1.1.0");
    assert_eq!(config.session_id_cookie_name(), "isItRickSessionId");
    assert_eq!(config.rick_rolls_displayed(), 10);
}

#[test]
fn test_full_override_replaces_all_six_values() {
    let (_dir, path) = override_file(FULL_OVERRIDE);
    let config = ConfigLoader::load_from_file(&path).unwrap();

    assert_eq!(
        config.settings,
        Settings {
            production: false,
            base_url: "/is_it_rick/".to_string(),
            database_directory: PathBuf::from("/data"),
            database_read_interval: 3,
            testing_port: 8123,
            session_id_duration: 86400,
        }
    );
    assert_eq!(
        config.rick_roll_database_file(),
        Path::new("/data/rick_rolls.json")
    );
    assert_eq!(config.user_database_file(), Path::new("/data/users.json"));
    assert_eq!(
        config.session_id_database_file(),
        Path::new("/data/session_ids.json")
    );
}

#[test]
fn test_static_values_ignore_overrides() {
    let (_dir, path) = override_file(FULL_OVERRIDE);
    let overridden = ConfigLoader::load(&OverrideSource::File(path));
    let defaults = ConfigLoader::load(&OverrideSource::Absent);

    for config in [&overridden, &defaults] {
        assert_eq!(config.version(), VERSION);
        assert_eq!(config.session_id_cookie_name(), SESSION_ID_COOKIE_NAME);
        assert_eq!(config.rick_rolls_displayed(), RICK_ROLLS_DISPLAYED);
    }
}

#[test]
fn test_lenient_load_never_fails() {
    for contents in ["this is = = not toml", "testing_port = \"not a port\"", "production = \"maybe\""] {
        let (_dir, path) = override_file(contents);
        let config = ConfigLoader::load(&OverrideSource::File(path));
        assert_eq!(config, IsItRickConfig::default(), "contents: {}", contents);
    }
}

#[test]
fn test_strict_load_surfaces_malformed_file() {
    let (_dir, path) = override_file("this is = = not toml");
    let err = ConfigLoader::load_strict(&OverrideSource::File(path)).unwrap_err();
    assert!(matches!(err, ApiError::ConfigError(_)));
}

#[test]
fn test_overrides_drive_client_urls() {
    let (_dir, path) = override_file(FULL_OVERRIDE);
    let config = ConfigLoader::load(&OverrideSource::File(path));

    let urls = config.urls();
    assert_eq!(urls.frontend.homepage, "/is_it_rick/");
    assert_eq!(urls.backend.sign_in, "/is_it_rick/api/sign_in/");
    assert_eq!(config.client_config().base_url, "/is_it_rick/");
}

#[test]
fn test_config_is_shareable_across_threads() {
    let config = std::sync::Arc::new(ConfigLoader::load(&OverrideSource::Absent));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = std::sync::Arc::clone(&config);
            std::thread::spawn(move || config.user_database_file().to_path_buf())
        })
        .collect();
    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            PathBuf::from("/var/www/is_it_rick_data/users.json")
        );
    }
}
