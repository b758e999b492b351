// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Store credentials are not configured here: Firestore picks up
//! application default credentials, or the emulator when
//! `FIRESTORE_EMULATOR_HOST` is set.

use std::env;
use std::str::FromStr;

/// Which document store backs the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Firestore,
    /// Process-local store; data is lost on restart
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firestore" => Ok(Self::Firestore),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::Invalid {
                name: "STORE_BACKEND",
                value: other.to_string(),
            }),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// GCP project ID
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// Document store backend
    pub store_backend: StoreBackend,
}

impl Config {
    /// Offline config for tests.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            gcp_project_id: "test-project".to_string(),
            port: 8080,
            store_backend: StoreBackend::Memory,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            store_backend: env::var("STORE_BACKEND")
                .map(|v| v.parse::<StoreBackend>())
                .unwrap_or(Ok(StoreBackend::Firestore))?,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_backend_parse() {
        assert_eq!(
            "firestore".parse::<StoreBackend>().unwrap(),
            StoreBackend::Firestore
        );
        assert_eq!(
            " Memory ".parse::<StoreBackend>().unwrap(),
            StoreBackend::Memory
        );
        assert!(matches!(
            "redis".parse::<StoreBackend>(),
            Err(ConfigError::Invalid {
                name: "STORE_BACKEND",
                ..
            })
        ));
    }

    #[test]
    fn test_config_from_env() {
        env::set_var("STORE_BACKEND", "memory");
        env::set_var("GCP_PROJECT_ID", "chela-test");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.gcp_project_id, "chela-test");
    }
}
