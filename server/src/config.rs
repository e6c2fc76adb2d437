//! Server configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port (default 3000)
//! - `ETERNELLES_SITE_ROOT`: directory holding the built `/pkg` assets,
//!   overriding the Leptos `site_root`

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build config from the process environment (after loading `.env`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };
        let site_root = lookup("ETERNELLES_SITE_ROOT")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Ok(Self { port, site_root })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
