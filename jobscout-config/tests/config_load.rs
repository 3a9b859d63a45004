use jobscout_config::JobscoutConfigLoader;
use serial_test::serial;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

/// Helper to write a YAML file in a temp dir and return its path.
fn write_yaml(tmp: &TempDir, name: &str, yaml: &str) -> PathBuf {
    let p = tmp.path().join(name);
    fs::write(&p, yaml).expect("write yaml");
    p
}

#[test]
#[serial]
fn loads_file_with_env_expansion() {
    let tmp = TempDir::new().unwrap();

    let file_yaml = r#"
defaults:
  site: remotive
  days: 3
  max_results: 25
http:
  timeout_secs: 20
boards:
  themuse:
    api_key: "${THEMUSE_API_KEY}"
"#;
    let p = write_yaml(&tmp, "jobscout.yaml", file_yaml);

    temp_env::with_var("THEMUSE_API_KEY", Some("muse-secret"), || {
        let config = JobscoutConfigLoader::new()
            .with_file(&p)
            .load()
            .expect("load config");

        assert_eq!(config.defaults.site, "remotive");
        assert_eq!(config.defaults.days, 3);
        assert_eq!(config.defaults.max_results, 25);
        assert_eq!(config.http.timeout_secs, 20);
        assert_eq!(config.http.retries, 2); // untouched, keeps default
        assert_eq!(config.boards.themuse.api_key.as_deref(), Some("muse-secret"));
    });
}

#[test]
#[serial]
fn missing_optional_file_falls_back_to_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = JobscoutConfigLoader::new()
        .with_optional_file(tmp.path().join("does-not-exist.yaml"))
        .load()
        .expect("defaults still load");

    assert_eq!(config.defaults.site, "themuse");
    assert_eq!(config.boards.themuse.endpoint, "https://www.themuse.com");
    assert_eq!(config.boards.remotive.endpoint, "https://remotive.com");
}

#[test]
#[serial]
fn missing_required_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let result = JobscoutConfigLoader::new()
        .with_file(tmp.path().join("does-not-exist.yaml"))
        .load();
    assert!(result.is_err());
}
