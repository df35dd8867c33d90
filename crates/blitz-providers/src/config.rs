use std::env;
use std::fs;
use std::path::Path;

use blitz_core::Result;
use serde::{Deserialize, Serialize};

/// Env var overriding the backend endpoint.
const ENV_ENDPOINT: &str = "BLITZSCAN_ENDPOINT";
/// Env var overriding the API key.
const ENV_API_KEY: &str = "BLITZSCAN_API_KEY";

/// Default aggregator backend endpoint.
const DEFAULT_ENDPOINT: &str = "http://localhost:3001/generate_report";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the backend text-generation provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Endpoint accepting `{ prompt, context }` requests.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Optional model tag forwarded to the backend.
    #[serde(default)]
    pub model: Option<String>,
    /// Optional bearer token for the backend.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_owned()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Applies environment variable overrides on top of this configuration.
    ///
    /// `BLITZSCAN_ENDPOINT` replaces the endpoint and `BLITZSCAN_API_KEY`
    /// the API key; environment always wins over file values.
    #[must_use]
    pub fn apply_env(self) -> Self {
        self.apply_overrides(env::var(ENV_ENDPOINT).ok(), env::var(ENV_API_KEY).ok())
    }

    /// Applies the given overrides; `None` leaves the current value intact.
    fn apply_overrides(mut self, endpoint: Option<String>, api_key: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        if let Some(api_key) = api_key {
            self.api_key = Some(api_key);
        }
        self
    }
}
