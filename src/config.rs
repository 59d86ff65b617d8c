// src/config.rs
use crate::errors::ServerError;
use std::net::SocketAddr;

pub const ADDR_VAR: &str = "LISTING_FINDER_ADDR";
pub const WORKERS_VAR: &str = "LISTING_FINDER_WORKERS";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub addr: SocketAddr,
    /// Upper bound on astra worker threads.
    pub max_workers: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 5001)),
            max_workers: 8,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(ADDR_VAR) {
            cfg.addr = raw
                .trim()
                .parse()
                .map_err(|e| ServerError::Config(format!("{ADDR_VAR}={raw:?}: {e}")))?;
        }

        if let Some(raw) = lookup(WORKERS_VAR) {
            let workers: usize = raw
                .trim()
                .parse()
                .map_err(|e| ServerError::Config(format!("{WORKERS_VAR}={raw:?}: {e}")))?;
            if workers == 0 {
                return Err(ServerError::Config(format!(
                    "{WORKERS_VAR} must be at least 1"
                )));
            }
            cfg.max_workers = workers;
        }

        Ok(cfg)
    }
}
