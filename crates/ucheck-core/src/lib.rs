//! ucheck-core: Sans-IO model and flows for the ucheck upload page.
//!
//! Holds everything about the upload page that does not touch the
//! browser: the wire types of the sandbox `/tasks/*` API, the rendered
//! [`TaskRecord`] view model, the [`DragCounter`] state machine behind
//! the drop zone, the [`UploadSelection`] form state, and the
//! [`analyze`](submit::analyze) / [`refresh_tasks`](refresh::refresh_tasks)
//! flows written against the [`SandboxBackend`] seam.
//!
//! All network and DOM interaction lives in `ucheck-io`.

pub mod backend;
pub mod config;
pub mod drag;
pub mod refresh;
pub mod selection;
pub mod submit;
pub mod types;

#[cfg(test)]
mod fake;

pub use backend::{ApiError, CreateResponse, SandboxBackend};
pub use config::{ApiConfig, Endpoint};
pub use drag::DragCounter;
pub use refresh::refresh_tasks;
pub use selection::{InputMode, SelectedFile, Submission, UploadSelection};
pub use submit::{analyze, submit};
pub use types::{Score, TaskList, TaskRecord, TaskSummary};
