//! Create-task submission.

use tracing::{error, info, warn};

use crate::backend::{ApiError, CreateResponse, SandboxBackend};
use crate::refresh::refresh_tasks;
use crate::selection::Submission;
use crate::types::TaskRecord;

/// Send a submission to the matching create endpoint and log the answer.
///
/// A non-success status is logged but still returned as `Ok`: the page
/// treats create calls as fire-and-forget and refreshes regardless.
///
/// # Errors
///
/// Returns the backend's [`ApiError`] if the request fails or the body
/// is not JSON.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn submit<B: SandboxBackend>(
    backend: &B,
    submission: &Submission,
) -> Result<CreateResponse, ApiError> {
    let response = match submission {
        Submission::File(file) => {
            info!(name = %file.name, size = file.bytes.len(), "submitting file");
            backend.create_file(file).await?
        }
        Submission::Url(url) => {
            info!(%url, "submitting url");
            backend.create_url(url).await?
        }
    };

    if response.is_success() {
        info!(status = response.status, body = %response.body, "task created");
    } else {
        warn!(status = response.status, body = %response.body, "create request not accepted");
    }

    Ok(response)
}

/// The Analyze button flow: submit, then rebuild the task list.
///
/// `on_submitted` runs once the create call has finished, whatever its
/// outcome (the page clears its selection there). With no submission
/// (file mode, nothing chosen) no create request is sent, but
/// `on_submitted` still runs and the list is still refreshed. Create
/// failures are logged and do not stop the refresh.
///
/// # Errors
///
/// Returns the [`ApiError`] of the list fetch; see [`refresh_tasks`].
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn analyze<B: SandboxBackend>(
    backend: &B,
    submission: Option<Submission>,
    on_submitted: impl FnOnce(),
) -> Result<Vec<TaskRecord>, ApiError> {
    match submission {
        Some(submission) => {
            if let Err(e) = submit(backend, &submission).await {
                error!(error = %e, "create request failed");
            }
        }
        None => warn!("analyze pressed with no file selected"),
    }

    on_submitted();
    refresh_tasks(backend).await
}
