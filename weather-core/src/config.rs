use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Base URL of the weatherapi.com REST API.
pub const DEFAULT_WEATHER_API_URL: &str = "http://api.weatherapi.com/v1";

/// Location used when a tick carries no usable `location` setting.
pub const DEFAULT_LOCATION: &str = "london";

pub const ENV_API_KEY: &str = "API_KEY";
pub const ENV_WEATHER_API_URL: &str = "WEATHER_API_URL";
pub const ENV_PUBLIC_URL: &str = "PUBLIC_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "No weather API key configured.\n\
         Hint: set the API_KEY environment variable or `api_key` in the config file."
    )]
    MissingApiKey,

    #[error("Failed to read config file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine platform config directory")]
    NoConfigDir,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 8000 }
    }
}

/// Top-level service configuration.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_location = "paris"
///
/// [server]
/// port = 8080
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// weatherapi.com key. Usually supplied through `API_KEY`.
    pub api_key: Option<String>,

    pub weather_api_url: String,

    pub default_location: String,

    /// Externally visible base URL, e.g. "https://monitor.example.com/".
    /// When unset the manifest is built from the incoming request.
    pub public_url: Option<String>,

    /// Logo advertised in the integration manifest.
    pub logo_url: Option<String>,

    pub server: ServerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            weather_api_url: DEFAULT_WEATHER_API_URL.to_string(),
            default_location: DEFAULT_LOCATION.to_string(),
            public_url: None,
            logo_url: None,
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Load config from the platform config directory, or return defaults if
    /// the file doesn't exist yet.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load config from an explicit path. A missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;

        toml::from_str(&contents)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Path to the default config file.
    pub fn config_file_path() -> Result<PathBuf, ConfigError> {
        let dirs = ProjectDirs::from("dev", "weather-monitor", "weather-monitor")
            .ok_or(ConfigError::NoConfigDir)?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Apply overrides from the process environment.
    pub fn with_env(mut self) -> Self {
        self.apply_env_with(|key| std::env::var(key).ok());
        self
    }

    /// Apply overrides using `lookup` to resolve variable names. Empty values
    /// are ignored.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = get(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(url) = get(ENV_WEATHER_API_URL) {
            self.weather_api_url = url;
        }
        if let Some(url) = get(ENV_PUBLIC_URL) {
            self.public_url = Some(url);
        }
    }

    /// Returns the weather API key or an error explaining how to set it.
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }

    /// `host:port` the HTTP server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_weatherapi() {
        let cfg = Config::default();

        assert_eq!(cfg.weather_api_url, DEFAULT_WEATHER_API_URL);
        assert_eq!(cfg.default_location, "london");
        assert_eq!(cfg.bind_address(), "0.0.0.0:8000");
        assert!(cfg.public_url.is_none());
    }

    #[test]
    fn api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();

        assert!(matches!(err, ConfigError::MissingApiKey));
        assert!(err.to_string().contains("API_KEY"));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let cfg = Config { api_key: Some("  ".into()), ..Config::default() };
        assert!(cfg.api_key().is_err());
    }

    #[test]
    fn env_overrides_file_values() {
        let mut cfg = Config { api_key: Some("FROM_FILE".into()), ..Config::default() };

        cfg.apply_env_with(lookup_from(&[
            ("API_KEY", "FROM_ENV"),
            ("WEATHER_API_URL", "http://localhost:9999/v1"),
            ("PUBLIC_URL", "https://monitor.example.com/"),
        ]));

        assert_eq!(cfg.api_key().unwrap(), "FROM_ENV");
        assert_eq!(cfg.weather_api_url, "http://localhost:9999/v1");
        assert_eq!(cfg.public_url.as_deref(), Some("https://monitor.example.com/"));
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let mut cfg = Config { api_key: Some("FROM_FILE".into()), ..Config::default() };

        cfg.apply_env_with(lookup_from(&[("API_KEY", ""), ("WEATHER_API_URL", " ")]));

        assert_eq!(cfg.api_key().unwrap(), "FROM_FILE");
        assert_eq!(cfg.weather_api_url, DEFAULT_WEATHER_API_URL);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            default_location = "paris"

            [server]
            port = 9090
            "#,
        )
        .expect("valid toml");

        assert_eq!(cfg.default_location, "paris");
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.weather_api_url, DEFAULT_WEATHER_API_URL);
    }

    #[test]
    fn load_from_missing_file_is_read_error() {
        let err = Config::load_from(Path::new("/definitely/not/here/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
