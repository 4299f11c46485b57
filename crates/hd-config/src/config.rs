use crate::{ApiConfig, ConfigError, ConfigErrorResult, LoggingConfig, SessionConfig};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for HD_CONFIG_DIR env var, else use ./.hd/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply HD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: HD_CONFIG_DIR env var > ./.hd/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("HD_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".hd"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::api("api.base_url must not be empty"));
        }
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(ConfigError::api(
                "api.base_url must start with http:// or https://",
            ));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::api("api.timeout_secs must be greater than 0"));
        }

        // Validate session dir doesn't escape the config dir
        let session_path = std::path::Path::new(&self.session.dir);
        if session_path.is_absolute() || self.session.dir.contains("..") {
            return Err(ConfigError::session(
                "session.dir must be relative and cannot contain '..'",
            ));
        }

        if self.logging.dir.trim().is_empty() {
            return Err(ConfigError::logging("logging.dir must not be empty"));
        }

        Ok(())
    }

    /// Get absolute path to the session storage directory.
    pub fn session_dir(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.session.dir))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}s)",
            self.api.base_url, self.api.timeout_secs
        );
        info!(
            "  fixed token: {}",
            if self.api.token.is_some() {
                "configured"
            } else {
                "none"
            }
        );
        info!("  session dir: {}", self.session.dir);
        info!("  log level: {}", *self.logging.level);
    }

    /// Apply environment variable overrides.
    /// Called automatically by load() after reading the TOML file.
    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("HD_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("HD_API_TIMEOUT_SECS", &mut self.api.timeout_secs);
        Self::apply_env_option_string("HD_API_TOKEN", &mut self.api.token);

        // Session
        Self::apply_env_string("HD_SESSION_DIR", &mut self.session.dir);

        // Logging
        Self::apply_env_parse("HD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_option_string("HD_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
