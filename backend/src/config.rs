//! Application configuration file support.
//!
//! Settings are read from a TOML file and then overridden by environment
//! variables. Every section is optional.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//!
//! [repository]
//! seed_file = "catalog.json"
//!
//! [dashboard]
//! edited_within_days = 7
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::db::repository::{ErrorContext, RepositoryError};
use crate::models::CatalogSnapshot;
use crate::services::dashboard::DashboardSettings;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "TEAMCAT_CONFIG";

const DEFAULT_SEARCH_PATHS: [&str; 3] = ["teamcat.toml", "backend/teamcat.toml", "../teamcat.toml"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub repository: RepositorySettings,
    pub dashboard: DashboardSettings,
}

/// Bind address settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Repository settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositorySettings {
    /// Catalog snapshot JSON stored at startup.
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let context = || ErrorContext::new("load_config").with_entity_id(path.display());

        let content = fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration_with_context(
                format!("Failed to read config file: {}", e),
                context(),
            )
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration_with_context(
                format!("Failed to parse config file: {}", e),
                context(),
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the service cannot run with.
    pub fn validate(&self) -> Result<(), RepositoryError> {
        self.dashboard.validate().map_err(|message| {
            RepositoryError::configuration_with_context(
                message,
                ErrorContext::new("load_config").with_entity("dashboard"),
            )
        })
    }

    /// Load `teamcat.toml` from the first standard location that has one.
    ///
    /// Searches the current directory, then `backend/`, then the parent
    /// directory. Returns `Ok(None)` if none exists.
    pub fn from_default_location() -> Result<Option<Self>, RepositoryError> {
        for path in DEFAULT_SEARCH_PATHS.iter().map(PathBuf::from) {
            if path.exists() {
                log::info!("Loading configuration from {}", path.display());
                return Self::from_file(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// Resolve the configuration for this process.
    ///
    /// `TEAMCAT_CONFIG` wins over the default search; a missing file there is
    /// an error. Without any file the defaults are used. `HOST` and `PORT`
    /// are applied last.
    pub fn load() -> Result<Self, RepositoryError> {
        let mut config = match env::var(CONFIG_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::from_default_location()?.unwrap_or_default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Override server settings from `HOST` and `PORT`.
    ///
    /// An unparsable `PORT` is ignored with a warning.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => log::warn!("Ignoring invalid PORT value '{}'", port),
            }
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Read the configured seed snapshot, if any.
    pub fn load_seed(&self) -> Result<Option<CatalogSnapshot>, RepositoryError> {
        let Some(path) = &self.repository.seed_file else {
            return Ok(None);
        };
        let context = || ErrorContext::new("load_seed").with_entity_id(path.display());

        let content = fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration_with_context(
                format!("Failed to read seed file: {}", e),
                context(),
            )
        })?;
        let snapshot = serde_json::from_str(&content).map_err(|e| {
            RepositoryError::configuration_with_context(
                format!("Failed to parse seed file: {}", e),
                context(),
            )
        })?;
        Ok(Some(snapshot))
    }
}
