//! Wire types for the sandbox API and the rendered task view model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Response body of `GET /tasks/list`.
///
/// `tasks` is required: an error body without it must not read as an
/// empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    /// Tasks in server response order.
    pub tasks: Vec<TaskSummary>,
}

/// One entry of the remote task list.
///
/// Only the fields the page renders are decoded; the service sends
/// many more and they are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    /// Server-side task identifier, used to address the report.
    pub id: u64,
    /// Submitted target: a path on the analysis host, or a URL.
    pub target: String,
    /// Submission timestamp as formatted by the service.
    pub added_on: String,
    /// `"file"` or `"url"`.
    pub category: String,
    /// Analysis status (e.g. `"pending"`, `"running"`, `"reported"`).
    pub status: String,
}

impl TaskSummary {
    /// The last `/`-separated segment of the target.
    ///
    /// An empty target, or one ending in `/`, yields an empty name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.target.rsplit('/').next().unwrap_or_default()
    }
}

/// The part of `GET /tasks/report/{id}` the page reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub info: ReportInfo,
}

/// Report summary block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportInfo {
    /// Maliciousness score out of ten.
    pub score: f64,
}

/// Body of `POST /tasks/create/url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUrlRequest {
    pub url: String,
}

/// Analysis score as shown on a task card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    /// Report available with this score out of ten.
    Value(f64),
    /// Report missing, not ready, or failed to load.
    Pending,
}

impl Score {
    /// Returns `true` when no report score is available.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(score) => write!(f, "{score}/10"),
            Self::Pending => f.write_str("Pending"),
        }
    }
}

/// A task as rendered in the uploaded task list.
///
/// Rebuilt from scratch on every refresh; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRecord {
    pub id: u64,
    pub file_name: String,
    pub added_on: String,
    pub category: String,
    pub status: String,
    pub score: Score,
    /// Object URL of the downloaded report, if it could be fetched.
    pub report_url: Option<String>,
}

impl TaskRecord {
    /// Build a record for a task whose report could not be loaded.
    #[must_use]
    pub fn pending(summary: &TaskSummary) -> Self {
        Self {
            id: summary.id,
            file_name: summary.file_name().to_owned(),
            added_on: summary.added_on.clone(),
            category: summary.category.clone(),
            status: summary.status.clone(),
            score: Score::Pending,
            report_url: None,
        }
    }

    /// Build a record for a task with a loaded report.
    #[must_use]
    pub fn reported(summary: &TaskSummary, score: f64, report_url: String) -> Self {
        Self {
            score: Score::Value(score),
            report_url: Some(report_url),
            ..Self::pending(summary)
        }
    }

    /// Filename offered for the report download link.
    #[must_use]
    pub fn report_file_name(&self) -> String {
        format!("{}-report.json", self.file_name)
    }
}
