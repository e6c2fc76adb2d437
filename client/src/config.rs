//! API base configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle cannot read the environment at runtime, so the configured
//! bases are baked in at compile time. The last base that answered a login
//! is remembered in client storage and tried first on the next attempt,
//! unless the configuration is locked to its primary base.
//!
//! Build-time variables:
//! - `ETERNELLES_API_BASE`: primary base (default `http://localhost:8000`)
//! - `ETERNELLES_API_FALLBACKS`: comma-separated extra bases
//! - `ETERNELLES_API_BASE_LOCKED`: `1`/`true`/`yes` pins the primary base

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::session::API_BASE_KEY;
use crate::util::storage::KeyValueStore;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Source of API bases for the authenticator and the session persister.
pub trait ApiBaseSource {
    /// Bases to try, in order.
    fn api_base_candidates(&self) -> Vec<String>;

    /// Whether the effective base is pinned and must not be overwritten.
    fn is_api_base_locked(&self) -> bool;
}

impl<C: ApiBaseSource + ?Sized> ApiBaseSource for &C {
    fn api_base_candidates(&self) -> Vec<String> {
        (**self).api_base_candidates()
    }

    fn is_api_base_locked(&self) -> bool {
        (**self).is_api_base_locked()
    }
}

/// Statically configured API bases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub primary: String,
    pub fallbacks: Vec<String>,
    pub locked: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { primary: DEFAULT_API_BASE.to_owned(), fallbacks: Vec::new(), locked: false }
    }
}

impl ApiConfig {
    /// Read the configuration baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::parse(
            option_env!("ETERNELLES_API_BASE"),
            option_env!("ETERNELLES_API_FALLBACKS"),
            option_env!("ETERNELLES_API_BASE_LOCKED"),
        )
    }

    /// Build a configuration from raw variable values.
    pub fn parse(primary: Option<&str>, fallbacks: Option<&str>, locked: Option<&str>) -> Self {
        let primary = primary
            .map(normalize_base)
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_owned());
        let fallbacks = fallbacks
            .unwrap_or_default()
            .split(',')
            .map(normalize_base)
            .filter(|b| !b.is_empty())
            .collect();
        Self { primary, fallbacks, locked: parse_flag(locked) }
    }

    /// Ordered, de-duplicated candidates, optionally led by a remembered base.
    pub fn candidates(&self, remembered: Option<&str>) -> Vec<String> {
        if self.locked {
            return vec![self.primary.clone()];
        }
        let mut out: Vec<String> = Vec::new();
        let ordered = remembered
            .map(normalize_base)
            .into_iter()
            .chain(std::iter::once(self.primary.clone()))
            .chain(self.fallbacks.iter().cloned());
        for base in ordered {
            if !base.is_empty() && !out.contains(&base) {
                out.push(base);
            }
        }
        out
    }
}

impl ApiBaseSource for ApiConfig {
    fn api_base_candidates(&self) -> Vec<String> {
        self.candidates(None)
    }

    fn is_api_base_locked(&self) -> bool {
        self.locked
    }
}

/// `ApiConfig` combined with the base remembered in client storage.
#[derive(Clone, Debug)]
pub struct StoredApiConfig<S> {
    pub config: ApiConfig,
    pub store: S,
}

impl<S: KeyValueStore> StoredApiConfig<S> {
    pub fn new(config: ApiConfig, store: S) -> Self {
        Self { config, store }
    }
}

impl<S: KeyValueStore> ApiBaseSource for StoredApiConfig<S> {
    fn api_base_candidates(&self) -> Vec<String> {
        let remembered = self.store.get(API_BASE_KEY);
        self.config.candidates(remembered.as_deref())
    }

    fn is_api_base_locked(&self) -> bool {
        self.config.locked
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn parse_flag(raw: Option<&str>) -> bool {
    raw.map(str::trim)
        .map_or(false, |v| v == "1" || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes"))
}
