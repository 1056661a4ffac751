use serde::{Deserialize, Serialize};

use crate::request::LOAD_TEST_PATH;
use crate::{Result, SurgeError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurgeConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            static_dir: "./dist".to_string(),
        }
    }
}

/// Where load tests are executed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub url: String,
    pub path: String,
    /// Unset means wait for the run however long it takes
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080".to_string(),
            path: LOAD_TEST_PATH.to_string(),
            timeout_secs: None,
        }
    }
}

impl SurgeConfig {
    /// Defaults overridden by `PORT`, `STATIC_DIR`, `SURGE_BACKEND_URL`,
    /// `SURGE_BACKEND_PATH` and `SURGE_BACKEND_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| SurgeError::Config(format!("invalid PORT: {}", port)))?;
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            config.server.static_dir = dir;
        }
        if let Some(url) = lookup("SURGE_BACKEND_URL") {
            config.backend.url = url.trim_end_matches('/').to_string();
        }
        if let Some(path) = lookup("SURGE_BACKEND_PATH") {
            config.backend.path = path;
        }
        if let Some(secs) = lookup("SURGE_BACKEND_TIMEOUT_SECS") {
            let secs = secs.parse().map_err(|_| {
                SurgeError::Config(format!("invalid SURGE_BACKEND_TIMEOUT_SECS: {}", secs))
            })?;
            config.backend.timeout_secs = Some(secs);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SurgeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.backend.url, "http://localhost:8080");
        assert_eq!(config.backend.path, "/api/load-test");
        assert!(config.backend.timeout_secs.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = SurgeConfig::from_lookup(lookup(&[
            ("PORT", "9000"),
            ("SURGE_BACKEND_URL", "http://engine:9090/"),
            ("SURGE_BACKEND_TIMEOUT_SECS", "600"),
        ]))
        .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.backend.url, "http://engine:9090");
        assert_eq!(config.backend.timeout_secs, Some(600));
    }

    #[test]
    fn test_bad_port_rejected() {
        let err = SurgeConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, SurgeError::Config(_)));
    }
}
