//! The seam between the page flows and the sandbox service.

use crate::selection::SelectedFile;
use crate::types::TaskList;

/// Errors from talking to the sandbox service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("service returned HTTP {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("malformed response: {0}")]
    Decode(String),

    /// A browser API call failed while handling the response.
    #[error("browser API error: {0}")]
    Browser(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Outcome of a create-task call.
///
/// The body shape is not relied upon; it is only logged. The status is
/// kept so the caller can log non-success answers.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl CreateResponse {
    /// Whether the service answered with a 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Calls the upload page makes against the sandbox service.
///
/// The browser build implements this over `fetch`; tests use an
/// in-memory fake. Futures are not `Send` since the page runs on the
/// single browser thread.
#[allow(async_fn_in_trait)]
pub trait SandboxBackend {
    /// `POST /tasks/create/file` with the file as multipart field `file`.
    async fn create_file(&self, file: &SelectedFile) -> Result<CreateResponse, ApiError>;

    /// `POST /tasks/create/url` with JSON body `{url}`.
    async fn create_url(&self, url: &str) -> Result<CreateResponse, ApiError>;

    /// `GET /tasks/list`.
    async fn list_tasks(&self) -> Result<TaskList, ApiError>;

    /// `GET /tasks/report/{id}` decoded for `info.score`.
    async fn report_score(&self, id: u64) -> Result<f64, ApiError>;

    /// `GET /tasks/report/{id}` again, as raw bytes turned into a
    /// downloadable reference (an object URL in the browser).
    async fn report_download(&self, id: u64) -> Result<String, ApiError>;
}
