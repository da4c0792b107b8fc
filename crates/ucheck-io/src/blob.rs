//! Blob object URLs for downloadable report data.
//!
//! Reports are fetched as raw bytes and wrapped in a `Blob` so an
//! `<a download>` link can point at them. Each URL keeps its Blob alive
//! until revoked, so callers must hand every URL back to
//! [`revoke_object_url`] once it is no longer rendered.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// MIME type used for report blobs.
pub const REPORT_MIME: &str = "application/json";

/// Errors that can occur when creating a Blob URL.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for BlobError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

impl From<BlobError> for ucheck_core::ApiError {
    fn from(err: BlobError) -> Self {
        match err {
            BlobError::JsError(msg) => Self::Browser(msg),
        }
    }
}

/// Wrap `bytes` in a `Blob` of the given MIME type and return its
/// object URL.
///
/// # Errors
///
/// Returns [`BlobError::JsError`] if Blob or URL creation fails.
pub fn bytes_to_object_url(bytes: &[u8], mime_type: &str) -> Result<String, BlobError> {
    let uint8_array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    Ok(web_sys::Url::create_object_url_with_blob(&blob)?)
}

/// Release an object URL created by [`bytes_to_object_url`].
///
/// Best-effort: a failure only means the Blob lives until page unload.
pub fn revoke_object_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

/// Revoke the report URLs of a task list snapshot.
pub fn revoke_report_urls(records: &[ucheck_core::TaskRecord]) {
    for url in records.iter().filter_map(|r| r.report_url.as_deref()) {
        revoke_object_url(url);
    }
}
