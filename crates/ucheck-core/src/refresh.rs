//! Task list refresh.
//!
//! Fetches the remote task list and, one task at a time, tries to load
//! its report. Every refresh produces a complete new snapshot in server
//! order; nothing is merged with the previous list.

use tracing::{debug, info};

use crate::backend::{ApiError, SandboxBackend};
use crate::types::{TaskRecord, TaskSummary};

/// Rebuild the task list from the service.
///
/// For each task the report is fetched twice, first for the score and
/// then for the downloadable blob. Both fetches for task N finish before
/// task N+1 starts. If either fails the task is shown as pending with
/// no report link.
///
/// # Errors
///
/// Returns the backend's [`ApiError`] if the list itself cannot be
/// fetched or decoded. Report failures never fail the refresh.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn refresh_tasks<B: SandboxBackend>(backend: &B) -> Result<Vec<TaskRecord>, ApiError> {
    let list = backend.list_tasks().await?;
    let mut records = Vec::with_capacity(list.tasks.len());

    for summary in &list.tasks {
        records.push(load_record(backend, summary).await);
    }

    info!(count = records.len(), "task list refreshed");
    Ok(records)
}

#[allow(clippy::future_not_send)]
async fn load_record<B: SandboxBackend>(backend: &B, summary: &TaskSummary) -> TaskRecord {
    let report = async {
        let score = backend.report_score(summary.id).await?;
        let url = backend.report_download(summary.id).await?;
        Ok::<_, ApiError>((score, url))
    };

    match report.await {
        Ok((score, url)) => TaskRecord::reported(summary, score, url),
        Err(e) => {
            debug!(id = summary.id, error = %e, "report not available");
            TaskRecord::pending(summary)
        }
    }
}
