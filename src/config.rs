//! Endpoint configuration.
//!
//! The synthesis endpoint address is deployment secret material. It is either
//! handed in explicitly, read from the environment, or loaded from a JSON
//! settings file.

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Environment variable holding the synthesis endpoint URL.
pub const API_URL_ENV: &str = "CIM_TTS_API_URL";

/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "CIM_TTS_TIMEOUT_SECS";

/// Client timeout applied when nothing overrides it, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Where to reach the synthesis endpoint and how long to wait for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    pub api_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl SynthesisConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Read the endpoint URL (and optional timeout override) from the
    /// environment.
    pub fn from_env() -> Result<Self> {
        let api_url = env::var(API_URL_ENV)
            .map_err(|_| Error::configuration(format!("{} is not set", API_URL_ENV)))?;
        let timeout_secs = env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Ok(Self {
            api_url,
            timeout_secs,
        })
    }

    /// Load from a JSON settings file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!("failed reading config file {}: {}", path.display(), e))
        })?;
        let config: SynthesisConfig = serde_json::from_str(&raw).map_err(|e| {
            Error::configuration(format!("failed parsing config file {}: {}", path.display(), e))
        })?;
        Ok(config)
    }
}
