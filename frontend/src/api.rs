//! HTTP client for the yearbook REST API.
//!
//! Responsibilities
//! - Join the configured base URL with endpoint paths (exactly one slash).
//! - Issue GET/POST requests with a bounded deadline and decode JSON bodies.
//! - Classify every failure into one [`HttpError`] variant so pages can render
//!   a banner without inspecting transport details.
//!
//! Policy: a failed request is never retried here. Callers move their page
//! into `FetchState::Failed` and leave recovery to the user.

use futures_util::future::{select, Either};
use futures_util::pin_mut;
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

use crate::config::Config;

/// One fetch failure, classified.
#[derive(Debug, Clone, PartialEq)]
pub enum HttpError {
    /// The request never produced a response (connection refused, DNS, CORS).
    Network(String),
    /// The server answered outside [200, 300). `detail` carries the message
    /// from a DRF-style `{"detail": ...}` body when one was present.
    Status {
        code: u16,
        text: String,
        detail: Option<String>,
    },
    /// The body arrived but was not the expected JSON shape.
    Decode(String),
    /// No response within the configured deadline.
    Timeout { ms: u32 },
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::Network(message) => write!(f, "network error: {message}"),
            HttpError::Status { code, text, detail } => match detail {
                Some(detail) => write!(f, "HTTP {code} {text}: {detail}"),
                None => write!(f, "HTTP {code} {text}"),
            },
            HttpError::Decode(message) => write!(f, "unexpected response body: {message}"),
            HttpError::Timeout { ms } => write!(f, "no response within {ms} ms"),
        }
    }
}

impl std::error::Error for HttpError {}

/// Lifecycle of one page-level fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Thin JSON client bound to one base URL and one deadline.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url.clone(), config.request_timeout_ms)
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let request = Request::get(&self.url(path))
            .build()
            .map_err(|err| HttpError::Network(err.to_string()))?;
        let response = send_with_deadline(request, self.timeout_ms).await?;
        decode_json(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        let request = Request::post(&self.url(path))
            .json(body)
            .map_err(|err| HttpError::Decode(err.to_string()))?;
        let response = send_with_deadline(request, self.timeout_ms).await?;
        decode_json(response).await
    }
}

/// Sends a built request racing a [`TimeoutFuture`] deadline and maps non-2xx
/// responses to [`HttpError::Status`]. Shared with the resource exporter,
/// which needs the raw response for content-type checks.
pub async fn send_with_deadline(request: Request, timeout_ms: u32) -> Result<Response, HttpError> {
    let send = request.send();
    let deadline = TimeoutFuture::new(timeout_ms);
    pin_mut!(send);
    pin_mut!(deadline);

    let response = match select(send, deadline).await {
        Either::Left((result, _)) => result.map_err(|err| HttpError::Network(err.to_string()))?,
        Either::Right(_) => return Err(HttpError::Timeout { ms: timeout_ms }),
    };

    let code = response.status();
    if (200..300).contains(&code) {
        return Ok(response);
    }
    let text = response.status_text();
    let detail = match response.text().await {
        Ok(body) => extract_detail(&body),
        Err(_) => None,
    };
    Err(HttpError::Status { code, text, detail })
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, HttpError> {
    response
        .json::<T>()
        .await
        .map_err(|err| HttpError::Decode(err.to_string()))
}

/// Joins a base URL and a path with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Pulls the human-readable message out of a DRF error body, if there is one.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(|detail| detail.as_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_inserts_exactly_one_slash() {
        assert_eq!(join_url("http://api", "students/"), "http://api/students/");
        assert_eq!(join_url("http://api/", "students/"), "http://api/students/");
        assert_eq!(join_url("http://api/", "/students/"), "http://api/students/");
        assert_eq!(join_url("http://api", "/students/"), "http://api/students/");
    }

    #[test]
    fn extract_detail_reads_drf_error_bodies() {
        assert_eq!(
            extract_detail(r#"{"detail": "Not found."}"#),
            Some("Not found.".to_string())
        );
        assert_eq!(extract_detail(r#"{"error": "nope"}"#), None);
        assert_eq!(extract_detail("<html>502</html>"), None);
        assert_eq!(extract_detail(r#"{"detail": 42}"#), None);
    }

    #[test]
    fn status_errors_render_detail_when_present() {
        let with_detail = HttpError::Status {
            code: 404,
            text: "Not Found".to_string(),
            detail: Some("No such student.".to_string()),
        };
        assert_eq!(
            with_detail.to_string(),
            "HTTP 404 Not Found: No such student."
        );

        let bare = HttpError::Status {
            code: 502,
            text: "Bad Gateway".to_string(),
            detail: None,
        };
        assert_eq!(bare.to_string(), "HTTP 502 Bad Gateway");
    }

    #[test]
    fn fetch_state_exposes_loaded_data_only() {
        assert!(FetchState::<()>::Loading.is_loading());
        assert_eq!(FetchState::Loaded(7).data(), Some(&7));
        assert_eq!(FetchState::<i32>::Failed("x".to_string()).data(), None);
        assert_eq!(FetchState::<i32>::Idle.data(), None);
    }
}
