//! Property-based tests for derived data file paths

use is_it_rick::config::{ConfigLoader, DatabaseFiles, IsItRickConfig, OverrideSource, Settings};
use proptest::prelude::*;
use std::path::PathBuf;

fn directory_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9_]{1,12}", 0..5).prop_flat_map(|segments| {
        let joined = segments.join("/");
        (Just(joined), any::<bool>(), any::<bool>()).prop_map(|(joined, absolute, trailing)| {
            let mut dir = if absolute { format!("/{}", joined) } else { joined };
            if trailing && !dir.ends_with('/') {
                dir.push('/');
            }
            dir
        })
    })
}

proptest! {
    /// Derived paths are the directory joined with the fixed filenames
    #[test]
    fn test_derived_paths_join_directory(dir in directory_strategy()) {
        let directory = PathBuf::from(&dir);
        let config = IsItRickConfig::from_settings(Settings {
            database_directory: directory.clone(),
            ..Settings::default()
        });

        prop_assert_eq!(config.rick_roll_database_file(), directory.join("rick_rolls.json"));
        prop_assert_eq!(config.user_database_file(), directory.join("users.json"));
        prop_assert_eq!(config.session_id_database_file(), directory.join("session_ids.json"));
    }

    /// Derived paths are children of the directory, with no doubled separator
    #[test]
    fn test_derived_paths_are_children(dir in directory_strategy()) {
        let directory = PathBuf::from(&dir);
        let files = DatabaseFiles::under(&directory);

        for file in [&files.rick_rolls, &files.users, &files.session_ids] {
            prop_assert!(file.starts_with(&directory));
            prop_assert!(!file.to_string_lossy().contains("//"));
        }
    }
}

/// Resolving the same source twice yields the same configuration
#[test]
fn test_resolution_idempotence_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(any::<bool>(), 1u16..u16::MAX, 1u64..1_000_000), |(production, port, interval)| {
            let temp_dir = tempfile::TempDir::new().unwrap();
            let path = temp_dir.path().join("local_config.toml");
            std::fs::write(
                &path,
                format!(
                    "production = {}\ntesting_port = {}\ndatabase_read_interval = {}\n",
                    production, port, interval
                ),
            )
            .unwrap();

            let source = OverrideSource::File(path);
            let first = ConfigLoader::load(&source);
            let second = ConfigLoader::load(&source);
            assert_eq!(first, second);
            assert_eq!(first.settings.production, production);
            assert_eq!(first.settings.testing_port, port);
            assert_eq!(first.settings.database_read_interval, interval);

            Ok(())
        })
        .unwrap();
}
