use super::*;
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

fn clear_env() {
    unsafe {
        env::remove_var(URL_ENV);
        env::remove_var(ANON_KEY_ENV);
        env::remove_var(TIMEOUT_ENV);
    }
}

#[test]
#[serial]
fn test_from_env_reads_variables() {
    clear_env();
    unsafe {
        env::set_var(URL_ENV, "https://demo.example.co");
        env::set_var(ANON_KEY_ENV, "anon-123");
        env::set_var(TIMEOUT_ENV, "12");
    }

    let config = Config::from_env().unwrap();
    assert_eq!(config.url, "https://demo.example.co");
    assert_eq!(config.anon_key, "anon-123");
    assert_eq!(config.timeout_secs, 12);

    clear_env();
}

#[test]
#[serial]
fn test_from_env_defaults_timeout() {
    clear_env();
    let config = Config::from_env().unwrap();
    assert_eq!(config.timeout_secs, 30);
    assert!(config.url.is_empty());
}

#[test]
#[serial]
fn test_from_env_rejects_bad_timeout() {
    clear_env();
    unsafe {
        env::set_var(TIMEOUT_ENV, "soon");
    }

    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
    assert!(err.to_string().contains("soon"));

    clear_env();
}

#[test]
#[serial]
fn test_builder_overrides_env() {
    clear_env();
    unsafe {
        env::set_var(URL_ENV, "https://env.example.co");
    }

    let config = Config::from_env()
        .unwrap()
        .with_url("https://flag.example.co")
        .with_anon_key("flag-key");

    assert_eq!(config.url, "https://flag.example.co");
    assert_eq!(config.anon_key, "flag-key");

    clear_env();
}

#[test]
fn test_from_file_reads_yaml() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "url: https://file.example.co").unwrap();
    writeln!(file, "anon_key: file-key").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.url, "https://file.example.co");
    assert_eq!(config.anon_key, "file-key");
    assert_eq!(config.timeout_secs, 30);
}

#[test]
fn test_from_file_missing_file() {
    let err = Config::from_file(Path::new("/nonexistent/studiodesk.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::File { .. }));
}

#[test]
fn test_from_file_malformed_yaml() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "timeout_secs: [not, a, number]").unwrap();

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::File { .. }));
}

#[test]
fn test_validate_requires_url_and_key() {
    let err = Config::default().validate().unwrap_err();
    assert!(matches!(err, ConfigError::Missing { field: "url" }));

    let err = Config::default()
        .with_url("https://x.example.co")
        .validate()
        .unwrap_err();
    assert!(matches!(err, ConfigError::Missing { field: "anon_key" }));
}

#[test]
fn test_validate_rejects_non_http_url_and_zero_timeout() {
    let err = Config::default()
        .with_url("ftp://x.example.co")
        .with_anon_key("k")
        .validate()
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));

    let err = Config::default()
        .with_url("https://x.example.co")
        .with_anon_key("k")
        .with_timeout_secs(0)
        .validate()
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn test_validate_accepts_complete_config() {
    let config = Config::default()
        .with_url("http://localhost:54321")
        .with_anon_key("k");
    assert!(config.validate().is_ok());
}
