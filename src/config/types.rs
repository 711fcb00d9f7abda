use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where and how to reach the summarization service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Origin of the service (e.g., "http://localhost:8000").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Whole-request timeout in seconds. Unset means wait for the transport.
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/spinner tick in milliseconds (default: 120).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_tick_rate_ms() -> u64 {
    120
}

impl ServiceConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
