//! Host configuration loaded from environment variables.
//!
//! DESIGN
//! ======
//! Unset variables fall back to defaults. A variable that is set but
//! unparsable is a startup error rather than a silent default, so a typo in
//! `PORT` never binds an unexpected port.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::net::config::normalize_api_base;

use crate::error::HostError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    /// Interface to bind, e.g. `0.0.0.0`.
    pub bind_addr: String,
    pub port: u16,
    /// Base URL of the REST backend, published to the browser.
    pub api_base: String,
}

impl HostConfig {
    /// Read `BIND_ADDR`, `PORT` and `MEDILOCATE_API_BASE`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Config`] when `PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, HostError> {
        let port = match env_non_empty("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| HostError::Config(format!("PORT={raw:?}: {e}")))?,
            None => DEFAULT_PORT,
        };
        let bind_addr = env_non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let api_base = normalize_api_base(env_non_empty("MEDILOCATE_API_BASE").as_deref());
        Ok(Self { bind_addr, port, api_base })
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
