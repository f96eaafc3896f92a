//! Integration configuration: NOAA weather service.

use integration_noaa::NoaaConfig;
use serde::{Deserialize, Serialize};

/// NOAA api.weather.gov configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoaaAppConfig {
    /// API base URL
    #[serde(default = "default_noaa_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_noaa_timeout")]
    pub timeout_secs: u64,

    /// `User-Agent` header; NOAA asks for an application name and contact
    #[serde(default = "default_noaa_user_agent")]
    pub user_agent: String,
}

fn default_noaa_base_url() -> String {
    "https://api.weather.gov".to_string()
}

const fn default_noaa_timeout() -> u64 {
    30
}

fn default_noaa_user_agent() -> String {
    concat!("cragcast/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for NoaaAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_noaa_base_url(),
            timeout_secs: default_noaa_timeout(),
            user_agent: default_noaa_user_agent(),
        }
    }
}

impl From<&NoaaAppConfig> for NoaaConfig {
    fn from(config: &NoaaAppConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout_secs,
            user_agent: config.user_agent.clone(),
        }
    }
}
