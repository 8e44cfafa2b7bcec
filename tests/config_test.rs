// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Loading search settings from disk.

use std::io::Write;

use glass_pyramid::{ConfigError, SearchConfig};

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = SearchConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, SearchConfig::default());
}

#[test]
fn test_load_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "precision = 1e-6").unwrap();
    writeln!(file, "seconds_per_unit = 2.5").unwrap();

    let config = SearchConfig::load_from(file.path()).unwrap();
    assert_eq!(config.precision, 1e-6);
    assert_eq!(config.seconds_per_unit, 2.5);
    assert_eq!(config.upper_bound, SearchConfig::default().upper_bound);
}

#[test]
fn test_parse_error_names_the_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "precision = \"fine\"").unwrap();

    match SearchConfig::load_from(file.path()) {
        Err(ConfigError::Parse { path, .. }) => assert_eq!(path, file.path()),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_invalid_values_are_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "precision = -0.5").unwrap();

    assert!(matches!(
        SearchConfig::load_from(file.path()),
        Err(ConfigError::Validation(_))
    ));
}
