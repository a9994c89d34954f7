use std::fs;
use std::path::{Path, PathBuf};

use regdeadlines::config::AppConfig;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn missing_files_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();

    let config = AppConfig::from_files(
        &dir.path().join("db_config.json"),
        &dir.path().join("api_config.json"),
    )
    .expect("defaults should load without any config file");

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.database.host, "localhost");
    assert_eq!(config.database.table_name, "VoterRegistrationDeadlines");
    assert!(!config.database.run_migrations);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn both_files_merge_into_one_config() {
    let dir = TempDir::new().unwrap();
    let db = write(
        dir.path(),
        "db_config.json",
        r#"{
            "database": {
                "host": "db.internal",
                "user": "deadlines_ro",
                "password": "hunter2",
                "database_name": "voter_registration",
                "table_name": "Deadlines2024"
            }
        }"#,
    );
    let api = write(
        dir.path(),
        "api_config.json",
        r#"{
            "server": { "host": "127.0.0.1", "port": 8080 },
            "logging": { "level": "debug", "format": "json" }
        }"#,
    );

    let config = AppConfig::from_files(&db, &api).expect("valid config files should load");

    assert_eq!(config.database.host, "db.internal");
    assert_eq!(config.database.user, "deadlines_ro");
    assert_eq!(config.database.table_name, "Deadlines2024");
    // Values absent from the files keep their defaults.
    assert_eq!(config.database.port, 5432);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn table_name_must_be_a_plain_identifier() {
    let dir = TempDir::new().unwrap();
    let db = write(
        dir.path(),
        "db_config.json",
        r#"{"database": {"table_name": "Deadlines; DROP TABLE voters"}}"#,
    );

    let result = AppConfig::from_files(&db, &dir.path().join("api_config.json"));
    assert!(
        result.is_err(),
        "Expected a non-identifier table name to fail validation"
    );
}

#[test]
fn empty_database_name_is_rejected() {
    let dir = TempDir::new().unwrap();
    let db = write(
        dir.path(),
        "db_config.json",
        r#"{"database": {"database_name": "  "}}"#,
    );

    let result = AppConfig::from_files(&db, &dir.path().join("api_config.json"));
    assert!(result.is_err(), "Expected a blank database name to fail");
}

#[test]
fn malformed_json_is_a_startup_error() {
    let dir = TempDir::new().unwrap();
    let db = write(dir.path(), "db_config.json", "{ not json at all");

    let result = AppConfig::from_files(&db, &dir.path().join("api_config.json"));
    assert!(result.is_err(), "Expected malformed JSON to fail loading");
}

#[test]
fn environment_overrides_file_values() {
    // No other test in this binary asserts database.password, so the
    // temporary override cannot race a parallel assertion.
    std::env::set_var("REGDEADLINES_DATABASE_PASSWORD", "from-env");

    let dir = TempDir::new().unwrap();
    let db = write(
        dir.path(),
        "db_config.json",
        r#"{"database": { "host": "db.internal", "password": "from-file" }}"#,
    );

    let config = AppConfig::from_files(&db, &dir.path().join("api_config.json"))
        .expect("config with env override should load");

    std::env::remove_var("REGDEADLINES_DATABASE_PASSWORD");

    assert_eq!(config.database.password, "from-env");
    assert_eq!(config.database.host, "db.internal");
}
