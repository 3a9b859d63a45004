//! Loader for jobscout configuration with YAML + environment overlays.
//!
//! Configuration is optional: the CLI works with built-in defaults, and a
//! `jobscout.yaml` (or a file passed via `--config`) can override board
//! endpoints, API keys, HTTP tuning, and default flag values. Environment
//! variables prefixed with `JOBSCOUT__` override the file, and `${VAR}`
//! placeholders inside string values are expanded recursively.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

/// Top-level configuration; every section has working defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct JobscoutConfig {
    pub defaults: Defaults,
    pub http: HttpSettings,
    pub boards: Boards,
}

/// Default values for CLI flags left unset.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub site: String,
    /// Maximum posting age in days; 0 disables recency filtering.
    pub days: u32,
    pub max_results: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            site: "themuse".into(),
            days: 7,
            max_results: 50,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    pub timeout_secs: u64,
    pub retries: usize,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            retries: 2,
        }
    }
}

/// Per-board endpoint and credential overrides.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Boards {
    pub themuse: ThemuseSettings,
    pub remotive: RemotiveSettings,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ThemuseSettings {
    pub endpoint: String,
    /// Optional API key; The Muse serves unauthenticated requests at a
    /// lower rate limit, so this stays `None` unless configured.
    pub api_key: Option<String>,
}

impl Default for ThemuseSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://www.themuse.com".into(),
            api_key: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RemotiveSettings {
    pub endpoint: String,
}

impl Default for RemotiveSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://remotive.com".into(),
        }
    }
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hiding the `config` crate wiring (YAML + env overrides).
pub struct JobscoutConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for JobscoutConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl JobscoutConfigLoader {
    /// Start with the default sources: `JOBSCOUT__` env overrides only.
    ///
    /// ```
    /// use jobscout_config::JobscoutConfigLoader;
    ///
    /// let config = JobscoutConfigLoader::new().load().expect("defaults load");
    /// assert_eq!(config.defaults.site, "themuse");
    /// assert_eq!(config.defaults.days, 7);
    /// ```
    pub fn new() -> Self {
        let builder =
            Config::builder().add_source(Environment::with_prefix("JOBSCOUT").separator("__"));
        Self { builder }
    }

    /// Attach a config file that must exist; the `config` crate infers the
    /// format from the suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self.builder.add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Attach a config file that may be absent, for the implicit
    /// `jobscout.yaml` lookup in the working directory.
    pub fn with_optional_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(false));
        self
    }

    /// Merge an inline YAML snippet, mainly for tests.
    ///
    /// ```
    /// use jobscout_config::JobscoutConfigLoader;
    ///
    /// let cfg = JobscoutConfigLoader::new()
    ///     .with_yaml_str(
    ///         r#"
    /// defaults:
    ///   days: 3
    /// boards:
    ///   themuse:
    ///     api_key: "abc123"
    /// "#,
    ///     )
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(cfg.defaults.days, 3);
    /// assert_eq!(cfg.boards.themuse.api_key.as_deref(), Some("abc123"));
    /// // Untouched sections keep their defaults.
    /// assert_eq!(cfg.boards.remotive.endpoint, "https://remotive.com");
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources.
    ///
    /// `${VAR}` placeholders are expanded before the strongly typed structs
    /// are materialised, so secrets can live in the environment while the
    /// YAML stays checked in.
    pub fn load(self) -> Result<JobscoutConfig, ConfigError> {
        let cfg = self.builder.build()?;

        // Go through serde_json::Value so placeholders inside any string can
        // be expanded before typing.
        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        let typed: JobscoutConfig =
            serde_json::from_value(v).map_err(|e| ConfigError::Message(e.to_string()))?;
        Ok(typed)
    }
}
