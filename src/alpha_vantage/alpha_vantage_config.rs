use std::env;
use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

use crate::fetch::quote_fetcher::DEFAULT_REQUEST_INTERVAL;

pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Key value shipped in sample configs; treated as not configured.
pub const PLACEHOLDER_API_KEY: &str = "demo";

#[derive(Clone)]
pub struct AlphaVantageConfig {
    pub api_key: Option<String>,
    pub base_url: Url,
    pub request_interval: Duration,
}

impl AlphaVantageConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("ALPHA_VANTAGE_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty() && key != PLACEHOLDER_API_KEY);

        let raw_base_url =
            lookup("ALPHA_VANTAGE_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(raw_base_url.trim())
            .with_context(|| format!("invalid ALPHA_VANTAGE_BASE_URL {raw_base_url:?}"))?;

        let request_interval = match lookup("QUOTE_REQUEST_INTERVAL_SECS") {
            Some(raw) => {
                let seconds: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid QUOTE_REQUEST_INTERVAL_SECS {raw:?}"))?;
                Duration::from_secs(seconds)
            }
            None => DEFAULT_REQUEST_INTERVAL,
        };

        Ok(Self {
            api_key,
            base_url,
            request_interval,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl fmt::Debug for AlphaVantageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphaVantageConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url.as_str())
            .field("request_interval", &self.request_interval)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AlphaVantageConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AlphaVantageConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();

        assert!(!config.is_configured());
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.request_interval, Duration::from_secs(12));
    }

    #[test]
    fn placeholder_and_blank_keys_are_not_configured() {
        assert!(!config_from(&[("ALPHA_VANTAGE_API_KEY", "demo")]).unwrap().is_configured());
        assert!(!config_from(&[("ALPHA_VANTAGE_API_KEY", "  ")]).unwrap().is_configured());

        let config = config_from(&[("ALPHA_VANTAGE_API_KEY", " KEY123 ")]).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("KEY123"));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = config_from(&[
            ("ALPHA_VANTAGE_BASE_URL", "http://127.0.0.1:9000/query"),
            ("QUOTE_REQUEST_INTERVAL_SECS", "0"),
        ])
        .unwrap();

        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:9000/query");
        assert_eq!(config.request_interval, Duration::ZERO);
    }

    #[test]
    fn invalid_overrides_are_rejected() {
        assert!(config_from(&[("ALPHA_VANTAGE_BASE_URL", "not a url")]).is_err());
        assert!(config_from(&[("QUOTE_REQUEST_INTERVAL_SECS", "soon")]).is_err());
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let config = config_from(&[("ALPHA_VANTAGE_API_KEY", "SECRET")]).unwrap();
        let rendered = format!("{config:?}");

        assert!(!rendered.contains("SECRET"));
        assert!(rendered.contains("<redacted>"));
    }
}
