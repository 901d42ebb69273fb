use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_SCORING_API_URL: &str = "http://localhost:8000";

/// Application configuration loaded from environment variables.
/// Everything has a default; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external scoring service (`/score` and `/health` hang off it).
    pub scoring_api_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Optional stylesheet replacing the built-in one.
    pub stylesheet_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let scoring_api_url = lookup("SCORING_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SCORING_API_URL.to_string());
        reqwest::Url::parse(&scoring_api_url)
            .with_context(|| format!("SCORING_API_URL '{scoring_api_url}' is not a valid URL"))?;

        Ok(Config {
            scoring_api_url,
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            stylesheet_path: lookup("STYLESHEET_PATH").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.scoring_api_url, "http://localhost:8000");
        assert_eq!(config.port, 3000);
        assert_eq!(config.rust_log, "info");
        assert!(config.stylesheet_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SCORING_API_URL", "https://scoring.internal:9000"),
            ("PORT", "8081"),
            ("STYLESHEET_PATH", "/srv/theme.css"),
        ])
        .unwrap();
        assert_eq!(config.scoring_api_url, "https://scoring.internal:9000");
        assert_eq!(config.port, 8081);
        assert_eq!(config.stylesheet_path, Some(PathBuf::from("/srv/theme.css")));
    }

    #[test]
    fn test_blank_url_falls_back_to_default() {
        let config = config_from(&[("SCORING_API_URL", "  ")]).unwrap();
        assert_eq!(config.scoring_api_url, DEFAULT_SCORING_API_URL);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("PORT", "not-a-port")]).is_err());
        assert!(config_from(&[("SCORING_API_URL", "localhost without scheme")]).is_err());
    }
}
