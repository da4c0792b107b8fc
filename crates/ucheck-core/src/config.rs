//! Sandbox service location and endpoint paths.

use serde::{Deserialize, Serialize};

/// Base URL used when none is embedded at build time.
pub const FALLBACK_BASE_URL: &str = "https://sharvita.xyz";

/// Base URL compiled into the binary.
///
/// Set `UCHECK_API_BASE` when building to point the page at another
/// sandbox host.
pub const DEFAULT_BASE_URL: &str = match option_env!("UCHECK_API_BASE") {
    Some(url) => url,
    None => FALLBACK_BASE_URL,
};

/// The four sandbox endpoints the page talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST /tasks/create/file` (multipart, field `file`).
    CreateFile,
    /// `POST /tasks/create/url` (JSON `{url}`).
    CreateUrl,
    /// `GET /tasks/list`.
    List,
    /// `GET /tasks/report/{id}`.
    Report(u64),
}

impl Endpoint {
    /// Path relative to the service base URL.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::CreateFile => "/tasks/create/file".to_owned(),
            Self::CreateUrl => "/tasks/create/url".to_owned(),
            Self::List => "/tasks/list".to_owned(),
            Self::Report(id) => format!("/tasks/report/{id}"),
        }
    }
}

/// Where the sandbox service lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme and host of the service, without a trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    /// Create a config for the given base URL.
    ///
    /// Trailing slashes are stripped so endpoint paths join cleanly.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Absolute URL of an endpoint.
    #[must_use]
    pub fn endpoint(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint.path())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
