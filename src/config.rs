use anyhow::{Context, Result};

pub const DEFAULT_BASE_URL: &str = "https://matcher-custom.onrender.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl MatcherConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("MATCHER_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match lookup("MATCHER_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("MATCHER_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = MatcherConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, MatcherConfig::default());
        assert_eq!(config.base_url, "https://matcher-custom.onrender.com");
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = MatcherConfig::from_lookup(lookup_from(&[
            ("MATCHER_BASE_URL", "http://localhost:5001/"),
            ("MATCHER_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:5001");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_invalid_timeout_is_an_error() {
        let result =
            MatcherConfig::from_lookup(lookup_from(&[("MATCHER_TIMEOUT_SECS", "soon")]));
        assert!(result.is_err());
    }
}
