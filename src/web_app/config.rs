// web_app/config.rs - Runtime configuration for the catalog
//
// The course service location comes from COURSE_API_URL. Native binaries
// read it at runtime (after loading .env). The browser cannot see the
// server's environment, so the hydrated page asks the server for its
// configuration (`server_fns::get_catalog_config`).

use serde::{Deserialize, Serialize};

/// Environment variable holding the course service base URL
pub const API_URL_VAR: &str = "COURSE_API_URL";

/// Base URL used when nothing is configured
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub api_base_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }
}

impl CatalogConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            api_base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// On wasm32 there is no process environment: only a value exported
    /// while the bundle was compiled is seen, otherwise the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(API_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .or_else(|| option_env!("COURSE_API_URL").map(str::to_string));

        match base_url {
            Some(url) => Self::with_base_url(url),
            None => Self::default(),
        }
    }

    /// Full URL of the course listing endpoint.
    pub fn courses_url(&self) -> String {
        format!("{}/courses", self.api_base_url)
    }
}
