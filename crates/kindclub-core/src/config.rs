//! Backend configuration
//!
//! The hosted backend is addressed by a base URL plus a public (anon) API
//! key, the standard pair for a PostgREST-style service. Both can come
//! from CLI flags or the `KINDCLUB_BACKEND_URL` / `KINDCLUB_ANON_KEY`
//! environment variables.

use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

/// Environment variable holding the backend base URL
pub const ENV_BACKEND_URL: &str = "KINDCLUB_BACKEND_URL";
/// Environment variable holding the public API key
pub const ENV_ANON_KEY: &str = "KINDCLUB_ANON_KEY";

/// Connection settings for the hosted backend
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the backend, without a trailing slash
    pub base_url: String,
    /// Public API key sent with every request
    pub anon_key: String,
    /// Local data directory (persisted session lives here)
    pub data_dir: PathBuf,
}

impl BackendConfig {
    /// Build a config from explicit values, trimming a trailing slash
    /// from the base URL.
    pub fn new(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        data_dir: PathBuf,
    ) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            anon_key: anon_key.into(),
            data_dir,
        }
    }

    /// Build a config from CLI overrides with environment fallbacks.
    pub fn resolve(
        url_override: Option<String>,
        key_override: Option<String>,
        data_dir: PathBuf,
    ) -> CoreResult<Self> {
        let base_url = url_override
            .or_else(|| std::env::var(ENV_BACKEND_URL).ok())
            .ok_or_else(|| {
                CoreError::Config(format!("backend URL not set (--backend-url or {ENV_BACKEND_URL})"))
            })?;
        let anon_key = key_override
            .or_else(|| std::env::var(ENV_ANON_KEY).ok())
            .ok_or_else(|| {
                CoreError::Config(format!("anon key not set (--anon-key or {ENV_ANON_KEY})"))
            })?;
        Ok(Self::new(base_url, anon_key, data_dir))
    }

    /// Auth endpoint, e.g. `auth_url("token?grant_type=password")`
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    /// REST endpoint for a table
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Path of the persisted session file
    pub fn session_file(&self) -> PathBuf {
        self.data_dir.join("session.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let cfg = BackendConfig::new("https://api.kindclub.app/", "key", PathBuf::from("/tmp"));
        assert_eq!(cfg.base_url, "https://api.kindclub.app");
        assert_eq!(
            cfg.auth_url("signup"),
            "https://api.kindclub.app/auth/v1/signup"
        );
        assert_eq!(
            cfg.rest_url("profiles"),
            "https://api.kindclub.app/rest/v1/profiles"
        );
    }

    #[test]
    fn session_file_under_data_dir() {
        let cfg = BackendConfig::new("https://x", "key", PathBuf::from("/data/kindclub"));
        assert_eq!(cfg.session_file(), PathBuf::from("/data/kindclub/session.json"));
    }
}
