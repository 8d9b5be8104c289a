use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub filter: FilterConfig,
}

/// Settings for the terminal UI loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick interval in milliseconds. Drives notice expiry.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Settings for the name filter applied before dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Case-insensitive substrings that reject a submitted name.
    #[serde(default = "default_banned_words")]
    pub banned_words: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            banned_words: default_banned_words(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_banned_words() -> Vec<String> {
    vec!["trump".to_string()]
}
