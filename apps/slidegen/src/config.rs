use anyhow::{Context, Result};

use crate::errors::AppError;

pub const DEFAULT_BASE_URL: &str = "https://api.cerebras.ai/v1";
pub const DEFAULT_MODEL: &str = "gpt-oss-120b";
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Application configuration loaded from environment variables.
/// Only the API key is required; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_retries: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::load(&lookup).map_err(|e| AppError::Config(format!("{e:#}")))
    }

    fn load(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            api_key: require_env(lookup, "CEREBRAS_API_KEY")?,
            base_url: lookup("CEREBRAS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model: lookup("CEREBRAS_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_retries: match lookup("SLIDEGEN_MAX_RETRIES") {
                Some(raw) => raw
                    .trim()
                    .parse::<u32>()
                    .context("SLIDEGEN_MAX_RETRIES must be a non-negative integer")?,
                None => DEFAULT_MAX_RETRIES,
            },
        })
    }
}

fn require_env(lookup: &dyn Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_apply_when_only_key_is_set() {
        let env = vars(&[("CEREBRAS_API_KEY", "csk-test")]);
        let config = Config::from_lookup(|k| env.get(k).cloned()).unwrap();

        assert_eq!(config.api_key, "csk-test");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_retries, 5);
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let err = Config::from_lookup(|_| None).unwrap_err();
        match err {
            AppError::Config(msg) => assert!(msg.contains("CEREBRAS_API_KEY"), "{msg}"),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let env = vars(&[("CEREBRAS_API_KEY", "   ")]);
        let err = Config::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_overrides_are_respected() {
        let env = vars(&[
            ("CEREBRAS_API_KEY", "k"),
            ("CEREBRAS_BASE_URL", "http://localhost:9000/v1/"),
            ("CEREBRAS_MODEL", "llama-3.3-70b"),
            ("SLIDEGEN_MAX_RETRIES", "2"),
        ]);
        let config = Config::from_lookup(|k| env.get(k).cloned()).unwrap();

        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.model, "llama-3.3-70b");
        assert_eq!(config.max_retries, 2);
    }

    #[test]
    fn test_invalid_retry_count_is_rejected() {
        let env = vars(&[("CEREBRAS_API_KEY", "k"), ("SLIDEGEN_MAX_RETRIES", "many")]);
        let err = Config::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        match err {
            AppError::Config(msg) => assert!(msg.contains("SLIDEGEN_MAX_RETRIES"), "{msg}"),
            other => panic!("expected config error, got {other:?}"),
        }
    }
}
