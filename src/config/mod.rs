use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::transcribe::client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use crate::utils::validate_endpoint;
use crate::DigestError;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Transcript service settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Application settings
    #[serde(default)]
    pub app: AppConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Batch transcript endpoint
    pub endpoint: String,

    /// API key sent with every request (overridden by --api-key / NANOGPT_API_KEY)
    pub api_key: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default output format
    pub default_output_format: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_output_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, the default location, or fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_path()?,
        };

        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());

            let content = fs_err::read_to_string(&config_path)
                .context("Failed to read config file")?;

            let config: Config = serde_yaml::from_str(&content)
                .context("Failed to parse config file")?;

            config.validate()?;
            Ok(config)
        } else if path.is_some() {
            anyhow::bail!("Config file not found: {}", config_path.display());
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to `path` or the default location
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_path()?,
        };

        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs_err::create_dir_all(parent)?;
            }
        }

        let content = serde_yaml::to_string(self)
            .context("Failed to serialize config")?;

        fs_err::write(&config_path, content)
            .context("Failed to write config file")?;

        Ok(config_path)
    }

    /// Get configuration file path
    pub fn config_path() -> Result<PathBuf> {
        // A config in the working directory wins
        let local_config = PathBuf::from("digest.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?;

        Ok(config_dir.join("transcript-digest").join("config.yaml"))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        validate_endpoint(&self.service.endpoint)
            .map_err(|e| DigestError::InvalidConfig(format!("service.endpoint: {}", e)))?;

        if self.service.timeout_secs == 0 {
            return Err(DigestError::InvalidConfig(
                "service.timeout_secs must be greater than zero".to_string(),
            )
            .into());
        }

        Ok(())
    }

    /// Pick the API key: explicit value first, then the config file
    pub fn resolve_api_key(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .or(self.service.api_key.as_deref())
            .filter(|key| !key.trim().is_empty())
            .map(str::to_string)
            .ok_or_else(|| DigestError::MissingApiKey.into())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.service.timeout_secs)
    }

    /// Display current configuration
    pub fn display(&self) {
        println!("Current Configuration:");
        println!("  Endpoint: {}", self.service.endpoint);
        println!(
            "  API Key: {}",
            if self.service.api_key.is_some() { "(set)" } else { "(not set)" }
        );
        println!("  Timeout: {}s", self.service.timeout_secs);
        println!("  Default Format: {}", self.app.default_output_format);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.service.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("service:\n  api_key: abc\n").unwrap();
        assert_eq!(config.service.api_key.as_deref(), Some("abc"));
        assert_eq!(config.service.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.app.default_output_format, "text");
    }

    #[test]
    fn rejects_bad_endpoint_and_zero_timeout() {
        let mut config = Config::default();
        config.service.endpoint = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.service.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn explicit_api_key_wins() {
        let mut config = Config::default();
        config.service.api_key = Some("from-file".to_string());

        assert_eq!(config.resolve_api_key(Some("from-cli")).unwrap(), "from-cli");
        assert_eq!(config.resolve_api_key(None).unwrap(), "from-file");
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let err = Config::default().resolve_api_key(Some("  ")).unwrap_err();
        assert!(err.downcast_ref::<DigestError>().is_some());
    }

    #[test]
    fn save_then_load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut config = Config::default();
        config.service.timeout_secs = 30;
        config.save(Some(&path)).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.service.timeout_secs, 30);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("absent.yaml"))).is_err());
    }
}
