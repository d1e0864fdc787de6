use std::fs;
use std::path::Path;
use std::time::Duration;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::source::{Source, SourceCategory};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Configuration for the remote backend attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Full URL of the fact-check endpoint. None disables the remote attempt.
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Surface backend failures to the user instead of silently falling back
    pub strict: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: 30,
            strict: false,
        }
    }
}

/// Configuration for the claimcheck pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    pub backend: BackendConfig,

    /// Sleep 2000-4000 ms during simulation to imitate processing latency
    pub simulate_latency: bool,

    /// Fixed seed for the simulation rng; None draws from entropy
    pub seed: Option<u64>,

    /// Curated source catalog, read-only after load
    pub catalog: Vec<Source>,
}

impl CheckerConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: CheckerConfig = serde_yaml::from_str(&contents)?;
        if config.catalog.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "Source catalog must not be empty".to_string(),
            ));
        }
        info!("Loaded configuration with {} catalog sources", config.catalog.len());
        Ok(config)
    }

    /// Resolve the backend endpoint, checking the CLAIMCHECK_ENDPOINT
    /// environment variable when the config does not set one.
    pub fn resolve_endpoint(&self) -> Option<String> {
        if let Some(endpoint) = &self.backend.endpoint {
            debug!("Using backend endpoint from config: {}", endpoint);
            return Some(endpoint.clone());
        }
        match std::env::var("CLAIMCHECK_ENDPOINT") {
            Ok(endpoint) if !endpoint.is_empty() => {
                info!("Using backend endpoint from environment: {}", endpoint);
                Some(endpoint)
            }
            _ => None,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.backend.timeout_secs)
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            simulate_latency: true,
            seed: None,
            catalog: builtin_catalog(),
        }
    }
}

/// The ten curated sources shipped with the tool. A config file may replace
/// the list, but entries are never mutated at runtime.
pub fn builtin_catalog() -> Vec<Source> {
    fn entry(name: &str, base_url: &str, credibility_score: u8, category: SourceCategory) -> Source {
        Source {
            name: name.to_string(),
            base_url: base_url.to_string(),
            credibility_score,
            category,
        }
    }

    vec![
        entry("Reuters", "reuters.com", 95, SourceCategory::News),
        entry("Associated Press", "apnews.com", 94, SourceCategory::News),
        entry("BBC News", "bbc.com", 92, SourceCategory::News),
        entry("NPR", "npr.org", 91, SourceCategory::News),
        entry("Snopes", "snopes.com", 89, SourceCategory::FactCheck),
        entry("PolitiFact", "politifact.com", 88, SourceCategory::FactCheck),
        entry("FactCheck.org", "factcheck.org", 90, SourceCategory::FactCheck),
        entry("World Health Organization", "who.int", 96, SourceCategory::Health),
        entry("CDC", "cdc.gov", 95, SourceCategory::Health),
        entry("NASA", "nasa.gov", 97, SourceCategory::Science),
    ]
}
