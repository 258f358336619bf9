//! Runtime configuration for the yearbook client.
//!
//! There is deliberately no global base-URL constant: the `App` root builds
//! one `Config` from compile-time environment variables and hands it to every
//! page through props, so each component (and each test) gets its endpoints
//! explicitly.

/// Default deadline for a single HTTP request, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the yearbook REST API, without a trailing slash.
    pub api_base_url: String,
    /// Base URL of the human-facing certificate verification pages.
    pub verify_base_url: String,
    /// Per-request deadline in milliseconds.
    pub request_timeout_ms: u32,
}

impl Config {
    /// Builds the configuration from `YEARBOOK_API_URL` / `YEARBOOK_VERIFY_URL`
    /// captured at compile time, falling back to the local dev backend.
    pub fn from_env() -> Self {
        Self {
            api_base_url: option_env!("YEARBOOK_API_URL")
                .unwrap_or("http://localhost:8000/yearbook/api")
                .to_string(),
            verify_base_url: option_env!("YEARBOOK_VERIFY_URL")
                .unwrap_or("http://localhost:8000/yearbook/verify")
                .to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
