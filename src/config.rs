//! Configuration loading from environment variables.

use anyhow::Result;
use std::env;
use std::str::FromStr;

/// Backend selection for auth and record storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Memory,
    Sqlite,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(Mode::Memory),
            "sqlite" => Ok(Mode::Sqlite),
            _ => anyhow::bail!("Invalid MODE: {}. Must be 'memory' or 'sqlite'", s),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub database_url: String,
    /// Signing secret for credential digests; stands in for a hosted
    /// backend's API key and is validated the same way.
    pub backend_api_key: String,
    pub demo_seed: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mode_str = env::var("MODE").unwrap_or_else(|_| "memory".to_string());
        let mode = Mode::from_str(&mode_str)?;

        Ok(Self {
            mode,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://data/braintrader.db".to_string()),
            backend_api_key: env::var("BACKEND_API_KEY")
                .unwrap_or_else(|_| "dev-local-key".to_string()),
            demo_seed: env::var("DEMO_SEED")
                .unwrap_or_else(|_| "true".to_string())
                .parse::<bool>()
                .unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert!(matches!(Mode::from_str("memory").unwrap(), Mode::Memory));
        assert!(matches!(Mode::from_str("SQLITE").unwrap(), Mode::Sqlite));
        assert!(Mode::from_str("firestore").is_err());
    }

    #[test]
    fn test_mode_error_names_the_choices() {
        let err = Mode::from_str("postgres").unwrap_err();
        assert!(err.to_string().contains("'memory' or 'sqlite'"));
    }
}
