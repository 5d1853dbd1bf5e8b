use shared::types::api_config::{ApiConfig, DEFAULT_CONTROLLER_URL};
use std::{net::SocketAddr, path::PathBuf};
use thiserror::Error;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub client_dist: PathBuf,
    /// Handed to the dashboard as its default controller connection.
    pub controller: ApiConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup("PROXYDASH_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr.parse().map_err(|_| ConfigError::Invalid {
            key: "PROXYDASH_ADDR",
            value: raw_addr.clone(),
        })?;

        let client_dist = lookup("CLIENT_DIST")
            .map(PathBuf::from)
            .unwrap_or_else(default_client_dist);

        let base_url = lookup("PROXYDASH_CONTROLLER_URL")
            .unwrap_or_else(|| DEFAULT_CONTROLLER_URL.to_string());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "PROXYDASH_CONTROLLER_URL",
                value: base_url,
            });
        }
        let controller = ApiConfig::new(base_url, lookup("PROXYDASH_CONTROLLER_SECRET"));

        Ok(Self {
            addr,
            client_dist,
            controller,
        })
    }
}

fn default_client_dist() -> PathBuf {
    // ../client/dist for trunk builds
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.pop();
    p.push("client");
    p.push("dist");
    p
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
    fn defaults_without_environment() {
        let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.addr, DEFAULT_ADDR.parse().unwrap());
        assert!(cfg.client_dist.ends_with("client/dist"));
        assert_eq!(cfg.controller, ApiConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let cfg = ServerConfig::from_lookup(lookup(&[
            ("PROXYDASH_ADDR", "0.0.0.0:8080"),
            ("CLIENT_DIST", "/srv/dash"),
            ("PROXYDASH_CONTROLLER_URL", "http://10.0.0.1:9090"),
            ("PROXYDASH_CONTROLLER_SECRET", "hunter2"),
        ]))
        .unwrap();
        assert_eq!(cfg.addr.port(), 8080);
        assert_eq!(cfg.client_dist, PathBuf::from("/srv/dash"));
        assert_eq!(cfg.controller.base_url, "http://10.0.0.1:9090");
        assert_eq!(cfg.controller.secret.as_deref(), Some("hunter2"));
    }

    #[test]
    fn rejects_bad_values() {
        let err = ServerConfig::from_lookup(lookup(&[("PROXYDASH_ADDR", "nope")])).unwrap_err();
        assert!(err.to_string().contains("PROXYDASH_ADDR"));

        let err = ServerConfig::from_lookup(lookup(&[("PROXYDASH_CONTROLLER_URL", "ftp://x")]))
            .unwrap_err();
        assert!(err.to_string().contains("PROXYDASH_CONTROLLER_URL"));
    }
}
