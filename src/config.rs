//! Client configuration resolved at build time.
//!
//! A WASM bundle has no process environment, so overrides are read with
//! `option_env!` when the bundle is compiled:
//!
//! - `TRAIN_GYM_POLL_SECS`: session revalidation interval, default 60
//! - `TRAIN_GYM_API_BASE`: prefix for REST paths, default empty (same origin)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::net::api::ApiClient;

pub const DEFAULT_POLL_SECS: u64 = 60;
pub const LOGIN_PATH: &str = "/login";
pub const LANDING_PATH: &str = "/main";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Delay between background session revalidations.
    pub poll_interval: Duration,
    /// Prefix prepended to every `/api/...` path. Never ends with `/`.
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { poll_interval: Duration::from_secs(DEFAULT_POLL_SECS), api_base: String::new() }
    }
}

impl ClientConfig {
    /// Build config from the compile-time environment, falling back to defaults.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("TRAIN_GYM_POLL_SECS"), option_env!("TRAIN_GYM_API_BASE"))
    }

    pub(crate) fn from_values(poll_secs: Option<&str>, api_base: Option<&str>) -> Self {
        Self { poll_interval: Duration::from_secs(parse_poll_secs(poll_secs)), api_base: normalize_api_base(api_base) }
    }

    /// REST client bound to this config's base path.
    pub fn api(&self) -> ApiClient {
        ApiClient::new(&self.api_base)
    }
}

fn parse_poll_secs(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_POLL_SECS)
}

fn normalize_api_base(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().trim_end_matches('/').to_owned()
}
