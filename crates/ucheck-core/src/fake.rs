//! In-memory backend for unit tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::backend::{ApiError, CreateResponse, SandboxBackend};
use crate::selection::SelectedFile;
use crate::types::{TaskList, TaskSummary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateFile { name: String, bytes: Vec<u8> },
    CreateUrl(String),
    List,
    ReportScore(u64),
    ReportDownload(u64),
}

#[derive(Debug)]
pub struct FakeBackend {
    pub tasks: Vec<TaskSummary>,
    pub scores: HashMap<u64, f64>,
    pub create_status: u16,
    pub create_error: Option<ApiError>,
    pub list_error: Option<ApiError>,
    pub download_fails: bool,
    pub calls: RefCell<Vec<Call>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            scores: HashMap::new(),
            create_status: 200,
            create_error: None,
            list_error: None,
            download_fails: false,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeBackend {
    pub fn with_task(mut self, id: u64, target: &str) -> Self {
        self.tasks.push(TaskSummary {
            id,
            target: target.to_owned(),
            added_on: "2024-01-01 00:00:00".to_owned(),
            category: "file".to_owned(),
            status: "pending".to_owned(),
        });
        self
    }

    pub fn with_report(mut self, id: u64, score: f64) -> Self {
        self.scores.insert(id, score);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn create_outcome(&self) -> Result<CreateResponse, ApiError> {
        self.create_error.clone().map_or_else(
            || {
                Ok(CreateResponse {
                    status: self.create_status,
                    body: serde_json::json!({ "task_id": 1 }),
                })
            },
            Err,
        )
    }
}

impl SandboxBackend for FakeBackend {
    async fn create_file(&self, file: &SelectedFile) -> Result<CreateResponse, ApiError> {
        self.record(Call::CreateFile {
            name: file.name.clone(),
            bytes: file.bytes.clone(),
        });
        self.create_outcome()
    }

    async fn create_url(&self, url: &str) -> Result<CreateResponse, ApiError> {
        self.record(Call::CreateUrl(url.to_owned()));
        self.create_outcome()
    }

    async fn list_tasks(&self) -> Result<TaskList, ApiError> {
        self.record(Call::List);
        self.list_error.clone().map_or_else(
            || {
                Ok(TaskList {
                    tasks: self.tasks.clone(),
                })
            },
            Err,
        )
    }

    async fn report_score(&self, id: u64) -> Result<f64, ApiError> {
        self.record(Call::ReportScore(id));
        self.scores.get(&id).copied().ok_or(ApiError::Status(404))
    }

    async fn report_download(&self, id: u64) -> Result<String, ApiError> {
        self.record(Call::ReportDownload(id));
        if self.download_fails {
            return Err(ApiError::Browser("createObjectURL failed".into()));
        }
        Ok(format!("blob:report/{id}"))
    }
}
