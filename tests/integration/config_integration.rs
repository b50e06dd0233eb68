//! Integration tests for configuration layering into a session.

use super::test_utils::with_home_env;
use propbook::cli::RunContext;
use propbook::config::ConfigLoader;
use tempfile::TempDir;

#[test]
fn test_global_file_disables_sample_data() {
    let test_dir = TempDir::new().unwrap();
    let config = with_home_env(&test_dir, &[], |home| {
        let dir = home.join(".config").join("propbook");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "[book]\nsample_data = false\n").unwrap();
        ConfigLoader::load().unwrap()
    });

    assert!(!config.book.sample_data);
    assert!(RunContext::from_config(&config).is_empty());
}

#[test]
fn test_defaults_without_any_file() {
    let test_dir = TempDir::new().unwrap();
    let config = with_home_env(&test_dir, &[], |_| ConfigLoader::load().unwrap());

    assert!(config.book.sample_data);
    assert!(!config.logging.enabled);
    assert_eq!(RunContext::from_config(&config).len(), 6);
}

#[test]
fn test_environment_overrides_explicit_file() {
    let test_dir = TempDir::new().unwrap();
    let explicit = test_dir.path().join("session.toml");
    std::fs::write(&explicit, "[logging]\nlevel = \"warn\"\n[book]\nsort_on_list = false\n").unwrap();

    let config = with_home_env(
        &test_dir,
        &[("PROPBOOK_LOGGING__LEVEL", "trace")],
        |_| ConfigLoader::load_with(Some(&explicit)).unwrap(),
    );

    assert_eq!(config.logging.level, "trace");
    assert!(!config.book.sort_on_list);
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_values_fail_validation() {
    let test_dir = TempDir::new().unwrap();
    let explicit = test_dir.path().join("bad.toml");
    std::fs::write(&explicit, "[logging]\noutput = \"syslog\"\n").unwrap();

    let config = ConfigLoader::load_from_file(&explicit).unwrap();
    let errors = config.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("syslog"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let test_dir = TempDir::new().unwrap();
    let explicit = test_dir.path().join("broken.toml");
    std::fs::write(&explicit, "[book\nsample_data = ").unwrap();

    assert!(ConfigLoader::load_from_file(&explicit).is_err());
}
