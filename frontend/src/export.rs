//! One-off certificate download with a direct-open fallback.
//!
//! The exporter fetches the certificate as binary, verifies the declared
//! content type really is an image, and triggers an anchor-click save under
//! `{external_id}_Certificate.{ext}`. The object URL is revoked immediately
//! after the click. The fetch races the page's configured request deadline.
//! Every failure takes the same single exit: the resource URL is opened in a
//! new tab exactly once and the error is handed back so the page can surface
//! a non-blocking toast. Export never panics and never blocks the rest of
//! the page.

use gloo_file::Blob;
use gloo_net::http::Request;
use std::fmt;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::api::{send_with_deadline, HttpError};
use crate::config::Config;

#[derive(Debug, Clone, PartialEq)]
pub enum ExportError {
    /// The fetch itself failed (network, non-2xx, timeout).
    Http(HttpError),
    /// The endpoint answered with something that is not an image, carrying
    /// the content type it declared.
    UnexpectedContentType(String),
    /// The browser-side save trigger could not be set up.
    SaveFailed(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Http(err) => write!(f, "download failed: {err}"),
            ExportError::UnexpectedContentType(content_type) => {
                write!(f, "expected an image, got \"{content_type}\"")
            }
            ExportError::SaveFailed(message) => write!(f, "could not trigger the save: {message}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<HttpError> for ExportError {
    fn from(err: HttpError) -> Self {
        ExportError::Http(err)
    }
}

/// How an export attempt ended.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    /// The save was triggered under this filename.
    Saved(String),
    /// Something failed; the certificate was opened in a new tab instead.
    OpenedDirectly(ExportError),
}

/// Certificate exporter carrying the page's configured request deadline.
#[derive(Debug, Clone, PartialEq)]
pub struct Exporter {
    timeout_ms: u32,
}

impl Exporter {
    pub fn from_config(config: &Config) -> Self {
        Self {
            timeout_ms: config.request_timeout_ms,
        }
    }

    /// Downloads the certificate at `url` and saves it locally. On any
    /// failure the URL is opened directly in a new tab (once) as the
    /// fallback.
    pub async fn export_certificate(&self, url: &str, external_id: &str) -> ExportOutcome {
        conclude(self.try_export(url, external_id).await, || {
            open_directly(url)
        })
    }

    async fn try_export(&self, url: &str, external_id: &str) -> Result<String, ExportError> {
        let request = Request::get(url)
            .build()
            .map_err(|err| ExportError::Http(HttpError::Network(err.to_string())))?;
        let response = send_with_deadline(request, self.timeout_ms).await?;

        let content_type = response.headers().get("content-type").unwrap_or_default();
        let extension = image_extension(&content_type)?;

        let bytes = response
            .binary()
            .await
            .map_err(|err| ExportError::Http(HttpError::Decode(err.to_string())))?;
        let blob = Blob::new_with_options(bytes.as_slice(), Some(content_type.as_str()));

        let filename = certificate_filename(external_id, extension);
        trigger_save(blob, &filename)?;
        Ok(filename)
    }
}

/// Folds an export attempt into its outcome. `open` is the direct-open
/// fallback; it runs exactly once, and only on the failure path — this is
/// the sole place the fallback is invoked.
fn conclude<F: FnOnce()>(result: Result<String, ExportError>, open: F) -> ExportOutcome {
    match result {
        Ok(filename) => ExportOutcome::Saved(filename),
        Err(err) => {
            open();
            ExportOutcome::OpenedDirectly(err)
        }
    }
}

/// File extension for an `image/*` content type; anything else is rejected.
/// Unrecognized image subtypes fall back to `png`, the upstream default.
fn image_extension(content_type: &str) -> Result<&'static str, ExportError> {
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    let subtype = match media_type.strip_prefix("image/") {
        Some(subtype) => subtype,
        None => return Err(ExportError::UnexpectedContentType(content_type.to_string())),
    };
    Ok(match subtype {
        "jpeg" | "jpg" => "jpg",
        "gif" => "gif",
        "webp" => "webp",
        "svg+xml" => "svg",
        _ => "png",
    })
}

fn certificate_filename(external_id: &str, extension: &str) -> String {
    format!("{external_id}_Certificate.{extension}")
}

/// Triggers the save by clicking a temporary anchor bound to an object URL.
/// The anchor is removed and the object URL revoked before returning.
fn trigger_save(blob: Blob, filename: &str) -> Result<(), ExportError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ExportError::SaveFailed("no document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| ExportError::SaveFailed("no document body".to_string()))?;

    let web_blob: web_sys::Blob = blob.into();
    let object_url = web_sys::Url::create_object_url_with_blob(&web_blob)
        .map_err(|_| ExportError::SaveFailed("object URL creation failed".to_string()))?;

    let anchor = document
        .create_element("a")
        .ok()
        .and_then(|element| element.dyn_into::<HtmlAnchorElement>().ok());
    let result = match anchor {
        Some(anchor) => {
            anchor.set_href(&object_url);
            anchor.set_download(filename);
            if body.append_child(&anchor).is_ok() {
                anchor.click();
                body.remove_child(&anchor).ok();
                Ok(())
            } else {
                Err(ExportError::SaveFailed("could not attach anchor".to_string()))
            }
        }
        None => Err(ExportError::SaveFailed("could not create anchor".to_string())),
    };

    web_sys::Url::revoke_object_url(&object_url).ok();
    result
}

fn open_directly(url: &str) {
    if let Some(window) = web_sys::window() {
        window.open_with_url_and_target(url, "_blank").ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn exporter_takes_its_deadline_from_the_config() {
        let config = Config {
            api_base_url: "http://api.example".to_string(),
            verify_base_url: "http://verify.example".to_string(),
            request_timeout_ms: 30_000,
        };
        assert_eq!(Exporter::from_config(&config).timeout_ms, 30_000);
    }

    #[test]
    fn fallback_runs_exactly_once_and_only_on_failure() {
        let opened = Cell::new(0);
        let outcome = conclude(
            Err(ExportError::UnexpectedContentType("text/html".to_string())),
            || opened.set(opened.get() + 1),
        );
        assert_eq!(opened.get(), 1);
        assert_eq!(
            outcome,
            ExportOutcome::OpenedDirectly(ExportError::UnexpectedContentType(
                "text/html".to_string()
            ))
        );

        let opened = Cell::new(0);
        let outcome = conclude(Ok("INSA009_Certificate.png".to_string()), || {
            opened.set(opened.get() + 1)
        });
        assert_eq!(opened.get(), 0);
        assert_eq!(
            outcome,
            ExportOutcome::Saved("INSA009_Certificate.png".to_string())
        );
    }

    #[test]
    fn html_content_type_is_rejected() {
        let err = image_extension("text/html").unwrap_err();
        assert_eq!(err, ExportError::UnexpectedContentType("text/html".to_string()));

        let err = image_extension("").unwrap_err();
        assert_eq!(err, ExportError::UnexpectedContentType(String::new()));
    }

    #[test]
    fn image_subtypes_map_to_extensions() {
        assert_eq!(image_extension("image/png").unwrap(), "png");
        assert_eq!(image_extension("image/jpeg").unwrap(), "jpg");
        assert_eq!(image_extension("image/webp").unwrap(), "webp");
        assert_eq!(image_extension("image/svg+xml").unwrap(), "svg");
        // Charset parameters and case do not matter.
        assert_eq!(image_extension("IMAGE/PNG; charset=binary").unwrap(), "png");
        // Unknown image subtype keeps the upstream default.
        assert_eq!(image_extension("image/x-unknown").unwrap(), "png");
    }

    #[test]
    fn filenames_follow_the_certificate_pattern() {
        assert_eq!(
            certificate_filename("INSA009", "png"),
            "INSA009_Certificate.png"
        );
        assert_eq!(
            certificate_filename("STU007", "jpg"),
            "STU007_Certificate.jpg"
        );
    }

    #[test]
    fn errors_render_a_user_facing_message() {
        let err = ExportError::UnexpectedContentType("text/html".to_string());
        assert_eq!(err.to_string(), "expected an image, got \"text/html\"");

        let err = ExportError::Http(HttpError::Timeout { ms: 10_000 });
        assert_eq!(err.to_string(), "download failed: no response within 10000 ms");
    }
}
