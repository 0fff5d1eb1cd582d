use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{DabsError, Result};

pub const DEFAULT_API_URL: &str = "https://oor75zmxdb.execute-api.us-west-2.amazonaws.com/prod";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fixed page size of the product catalog.
pub const PAGE_SIZE: u64 = 20;

/// Number of categories shown in the dashboard chart.
pub const CATEGORY_CHART_LIMIT: usize = 10;

pub const STATS_PATH: &str = "/stats";
pub const ITEMS_PATH: &str = "/items";
pub const INVENTORY_PATH: &str = "/inventory";
pub const STORES_PATH: &str = "/stores";
pub const TRENDING_PATH: &str = "/trending";

pub const API_KEY_HEADER: &str = "x-api-key";

pub const ENV_CONFIG: &str = "DABS_CONFIG";
pub const ENV_API_URL: &str = "DABS_API_URL";
pub const ENV_API_KEY: &str = "DABS_API_KEY";
pub const ENV_TIMEOUT_SECS: &str = "DABS_TIMEOUT_SECS";

/// Runtime settings for the API client.
///
/// Resolved in three layers: built-in defaults, then an optional JSON file,
/// then `DABS_*` environment variables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Load settings from the config file (if present) and the process environment.
    pub fn load() -> Result<Self> {
        let path = std::env::var(ENV_CONFIG)
            .ok()
            .map(PathBuf::from)
            .or_else(default_config_path);

        let settings = match path {
            Some(p) if p.exists() => Self::from_file(&p)?,
            _ => Self::default(),
        };
        Ok(settings.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Parse a JSON settings file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded settings file");
        Ok(settings)
    }

    /// Apply `DABS_*` overrides looked up through `lookup`.
    ///
    /// Empty values are ignored, as is a timeout that does not parse.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(ENV_API_URL) {
            self.api_url = url;
        }
        if let Some(key) = non_empty(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(raw) = non_empty(ENV_TIMEOUT_SECS) {
            match raw.trim().parse() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => tracing::warn!(value = %raw, "ignoring unparseable {}", ENV_TIMEOUT_SECS),
            }
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject a base URL the HTTP client could never reach, or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        self.validate_url()?;
        if self.timeout_secs == 0 {
            return Err(DabsError::InvalidArgument(
                "Request timeout must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn validate_url(&self) -> Result<()> {
        let url = self.api_url.trim();
        if url.is_empty() {
            return Err(DabsError::InvalidArgument("API URL is empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(DabsError::InvalidArgument(format!(
                "API URL must start with http:// or https://: {}",
                url
            )));
        }
        Ok(())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dabs-explorer").join("config.json"))
}
