// ABOUTME: Endpoint and timeout discovery with precedence chain
// ABOUTME: CLI flag → NOTEKEEP_ENDPOINT env var → YAML settings file

use crate::transport::DEFAULT_TIMEOUT_SECS;
use crate::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENDPOINT_ENV: &str = "NOTEKEEP_ENDPOINT";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// Reads `path`, or the default location when `None`. A missing file
    /// yields empty settings; a malformed one is a configuration error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_path() {
                Some(p) => p,
                None => return Ok(Settings::default()),
            },
        };

        if !path.exists() {
            log::debug!("no settings file at {}", path.display());
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("invalid settings file {}: {}", path.display(), e)))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

fn default_path() -> Option<PathBuf> {
    let config_home = match env::var("XDG_CONFIG_HOME") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(env::var("HOME").ok()?).join(".config"),
    };
    Some(config_home.join("notekeep").join("config.yaml"))
}

pub fn resolve_endpoint(cli_endpoint: Option<String>, settings: &Settings) -> Result<String> {
    // 1. CLI flag
    if let Some(endpoint) = cli_endpoint.filter(|e| !e.is_empty()) {
        return Ok(endpoint);
    }

    // 2. Environment variable
    if let Ok(endpoint) = env::var(ENDPOINT_ENV) {
        if !endpoint.is_empty() {
            return Ok(endpoint);
        }
    }

    // 3. Settings file
    if let Some(endpoint) = settings.endpoint.clone().filter(|e| !e.is_empty()) {
        return Ok(endpoint);
    }

    Err(Error::Config(format!(
        "No endpoint configured. Provide via --endpoint, {} env var, or settings file",
        ENDPOINT_ENV
    )))
}
