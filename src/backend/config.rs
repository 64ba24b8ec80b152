#![cfg(feature = "server")]
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://vitalyse-website-api.onrender.com";

#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl UpstreamConfig {
    /// Reads `VITALEYES_*` variables, loading `.env` first. Unset or
    /// unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let secs = |key: &str, fallback: Duration| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(fallback)
        };
        let base_url = lookup("VITALEYES_API_URL")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.base_url);
        Self {
            base_url,
            timeout: secs("VITALEYES_HTTP_TIMEOUT_SECS", defaults.timeout),
            connect_timeout: secs("VITALEYES_CONNECT_TIMEOUT_SECS", defaults.connect_timeout),
        }
    }
}
