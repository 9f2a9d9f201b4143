use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::io::ConfigError;
use crate::core::constants::{DEFAULT_ENDPOINT, DEFAULT_GREETING};

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL that receives `POST {"query": ...}`
    pub endpoint: Option<String>,
    /// First bot message of each session; an empty string disables it
    pub greeting: Option<String>,
    /// Show the sidebar on wide terminals
    pub sidebar: Option<bool>,
}

/// Keys accepted by `set` / `unset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Endpoint,
    Greeting,
    Sidebar,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 3] = [ConfigKey::Endpoint, ConfigKey::Greeting, ConfigKey::Sidebar];

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::Endpoint => "endpoint",
            ConfigKey::Greeting => "greeting",
            ConfigKey::Sidebar => "sidebar",
        }
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

/// Check that `raw` is an absolute http(s) URL and return it trimmed.
pub fn validate_endpoint(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|err| ConfigError::InvalidValue {
        key: ConfigKey::Endpoint.as_str(),
        reason: err.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(ConfigError::InvalidValue {
            key: ConfigKey::Endpoint.as_str(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

fn parse_toggle(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: ConfigKey::Sidebar.as_str(),
            reason: format!("expected on/off, got '{other}'"),
        }),
    }
}

impl Config {
    pub fn set_value(&mut self, key: ConfigKey, value: &str) -> Result<(), ConfigError> {
        match key {
            ConfigKey::Endpoint => self.endpoint = Some(validate_endpoint(value)?),
            ConfigKey::Greeting => self.greeting = Some(value.to_string()),
            ConfigKey::Sidebar => self.sidebar = Some(parse_toggle(value)?),
        }
        Ok(())
    }

    pub fn unset_value(&mut self, key: ConfigKey) {
        match key {
            ConfigKey::Endpoint => self.endpoint = None,
            ConfigKey::Greeting => self.greeting = None,
            ConfigKey::Sidebar => self.sidebar = None,
        }
    }

    /// Pick the endpoint by precedence: command line, environment, file, default.
    pub fn resolve_endpoint(
        &self,
        cli_override: Option<&str>,
        env_override: Option<&str>,
    ) -> Result<String, ConfigError> {
        let chosen = cli_override
            .or(env_override)
            .or(self.endpoint.as_deref())
            .unwrap_or(DEFAULT_ENDPOINT);
        validate_endpoint(chosen)
    }

    pub fn greeting(&self) -> &str {
        self.greeting.as_deref().unwrap_or(DEFAULT_GREETING)
    }

    pub fn sidebar_enabled(&self) -> bool {
        self.sidebar.unwrap_or(true)
    }
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
