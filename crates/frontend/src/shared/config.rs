//! Popup configuration
//!
//! The prediction endpoint is injected rather than hardcoded: an embedded
//! TOML default, optionally overridden from localStorage so a developer can
//! point the popup at another service without rebuilding.

use serde::Deserialize;
use web_sys::window;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PopupConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Full URL of the `/predict_email` resource
    pub endpoint: String,
    /// Defaults to `<endpoint base>/health`
    #[serde(default)]
    pub health_endpoint: Option<String>,
}

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict_email";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
endpoint = "http://127.0.0.1:5000/predict_email"
"#;

/// localStorage key holding an endpoint override
pub const ENDPOINT_STORAGE_KEY: &str = "phishscan-endpoint";

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                health_endpoint: None,
            },
        }
    }
}

impl PopupConfig {
    pub fn from_toml(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Invalid popup config: {e}"))
    }

    /// Replace the endpoint when an override is present and not blank
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            let endpoint = endpoint.trim();
            if !endpoint.is_empty() {
                self.api.endpoint = endpoint.to_string();
            }
        }
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.api.endpoint
    }

    pub fn health_endpoint(&self) -> String {
        match &self.api.health_endpoint {
            Some(url) => url.clone(),
            None => derive_health_endpoint(&self.api.endpoint),
        }
    }
}

/// Load configuration
///
/// Order:
/// 1. Embedded default (falls back to `PopupConfig::default()` if it fails to parse)
/// 2. Endpoint override from localStorage
pub fn load_config() -> PopupConfig {
    let config = PopupConfig::from_toml(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("{e}");
        PopupConfig::default()
    });

    let override_endpoint = load_endpoint_override();
    if let Some(endpoint) = &override_endpoint {
        log::info!("Endpoint override from localStorage: {}", endpoint);
    }
    config.with_endpoint_override(override_endpoint)
}

fn load_endpoint_override() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(ENDPOINT_STORAGE_KEY).ok().flatten())
}

/// Replace the last path segment of `endpoint` with `health`
fn derive_health_endpoint(endpoint: &str) -> String {
    let trimmed = endpoint.trim_end_matches('/');
    let path_start = trimmed.find("://").map(|i| i + 3).unwrap_or(0);

    match trimmed[path_start..].rfind('/') {
        Some(i) => format!("{}/health", &trimmed[..path_start + i]),
        None => format!("{}/health", trimmed),
    }
}
