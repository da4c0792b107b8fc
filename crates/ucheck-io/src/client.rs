//! HTTP client for the sandbox service.
//!
//! [`HttpBackend`] implements [`SandboxBackend`] with `reqwest`, which
//! compiles to `fetch` calls on `wasm32-unknown-unknown`. No timeouts,
//! retries or cancellation are applied.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use tracing::debug;
use ucheck_core::types::{CreateUrlRequest, Report};
use ucheck_core::{ApiConfig, ApiError, CreateResponse, Endpoint, SandboxBackend, SelectedFile, TaskList};

use crate::blob::{self, REPORT_MIME};

/// Multipart field name the create-file endpoint reads.
const FILE_FIELD: &str = "file";

/// Sandbox service client.
///
/// Cheap to clone; clones share the underlying `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: ApiConfig,
}

impl HttpBackend {
    /// Create a client for the service described by `config`.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// The service configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, endpoint: Endpoint) -> String {
        self.config.endpoint(endpoint)
    }

    async fn get_report(&self, id: u64) -> Result<Vec<u8>, ApiError> {
        let response = self
            .client
            .get(self.url(Endpoint::Report(id)))
            .send()
            .await
            .map_err(transport)?;
        let response = require_success(response)?;
        let bytes = response.bytes().await.map_err(transport)?;
        debug!(id, size = bytes.len(), "report fetched");
        Ok(bytes.to_vec())
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

fn require_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

/// Read a create-task answer. The status is recorded, not enforced.
async fn create_response(response: Response) -> Result<CreateResponse, ApiError> {
    let status = response.status().as_u16();
    let bytes = response.bytes().await.map_err(transport)?;
    let body = serde_json::from_slice(&bytes)?;
    Ok(CreateResponse { status, body })
}

/// Build the multipart part for an upload.
fn file_part(file: &SelectedFile) -> Part {
    Part::bytes(file.bytes.clone()).file_name(file.name.clone())
}

/// Decode the score out of a report body.
fn parse_score(bytes: &[u8]) -> Result<f64, ApiError> {
    let report: Report = serde_json::from_slice(bytes)?;
    Ok(report.info.score)
}

impl SandboxBackend for HttpBackend {
    async fn create_file(&self, file: &SelectedFile) -> Result<CreateResponse, ApiError> {
        let form = Form::new().part(FILE_FIELD, file_part(file));
        let response = self
            .client
            .post(self.url(Endpoint::CreateFile))
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        create_response(response).await
    }

    async fn create_url(&self, url: &str) -> Result<CreateResponse, ApiError> {
        let body = CreateUrlRequest {
            url: url.to_owned(),
        };
        let response = self
            .client
            .post(self.url(Endpoint::CreateUrl))
            .json(&body)
            .send()
            .await
            .map_err(transport)?;
        create_response(response).await
    }

    async fn list_tasks(&self) -> Result<TaskList, ApiError> {
        let response = self
            .client
            .get(self.url(Endpoint::List))
            .send()
            .await
            .map_err(transport)?;
        let response = require_success(response)?;
        let bytes = response.bytes().await.map_err(transport)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn report_score(&self, id: u64) -> Result<f64, ApiError> {
        parse_score(&self.get_report(id).await?)
    }

    async fn report_download(&self, id: u64) -> Result<String, ApiError> {
        let bytes = self.get_report(id).await?;
        Ok(blob::bytes_to_object_url(&bytes, REPORT_MIME)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn backend_uses_configured_base() {
        let backend = HttpBackend::new(ApiConfig::new("http://127.0.0.1:8090/"));
        assert_eq!(
            backend.url(Endpoint::Report(12)),
            "http://127.0.0.1:8090/tasks/report/12"
        );
        assert_eq!(backend.config().base_url, "http://127.0.0.1:8090");
    }

    #[test]
    fn parse_score_reads_info_score() {
        let score = parse_score(br#"{"info": {"score": 3.5, "id": 4}}"#).unwrap();
        assert!((score - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_score_rejects_unfinished_report() {
        let err = parse_score(br#"{"message": "report not found"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    // Runs the real client against a local mock of the service.
    #[cfg(not(target_arch = "wasm32"))]
    mod against_server {
        use mockito::{Matcher, Server, ServerGuard};
        use serde_json::json;
        use ucheck_core::{Score, refresh_tasks};

        use super::*;

        fn backend_for(server: &ServerGuard) -> HttpBackend {
            HttpBackend::new(ApiConfig::new(&server.url()))
        }

        #[tokio::test]
        async fn create_file_posts_multipart_file_field() {
            let mut server = Server::new_async().await;
            let mock = server
                .mock("POST", "/tasks/create/file")
                .match_header(
                    "content-type",
                    Matcher::Regex("^multipart/form-data; boundary=".into()),
                )
                .match_body(Matcher::AllOf(vec![
                    Matcher::Regex(r#"name="file""#.into()),
                    Matcher::Regex(r#"filename="sample.exe""#.into()),
                    Matcher::Regex("MZ-payload".into()),
                ]))
                .with_status(200)
                .with_body(r#"{"task_id": 7}"#)
                .create_async()
                .await;

            let file = SelectedFile::new("sample.exe".into(), b"MZ-payload".to_vec());
            let response = backend_for(&server).create_file(&file).await.unwrap();

            mock.assert_async().await;
            assert!(response.is_success());
            assert_eq!(response.body, json!({"task_id": 7}));
        }

        #[tokio::test]
        async fn create_url_posts_json_body() {
            let mut server = Server::new_async().await;
            let mock = server
                .mock("POST", "/tasks/create/url")
                .match_header("content-type", "application/json")
                .match_body(Matcher::Json(json!({"url": "http://evil.test/dropper"})))
                .with_status(200)
                .with_body(r#"{"task_id": 8}"#)
                .create_async()
                .await;

            let response = backend_for(&server)
                .create_url("http://evil.test/dropper")
                .await
                .unwrap();

            mock.assert_async().await;
            assert_eq!(response.status, 200);
        }

        #[tokio::test]
        async fn rejected_create_still_returns_response() {
            let mut server = Server::new_async().await;
            let _m = server
                .mock("POST", "/tasks/create/url")
                .with_status(400)
                .with_body(r#"{"message": "invalid url"}"#)
                .create_async()
                .await;

            let response = backend_for(&server).create_url("nonsense").await.unwrap();

            assert_eq!(response.status, 400);
            assert!(!response.is_success());
            assert_eq!(response.body["message"], "invalid url");
        }

        #[tokio::test]
        async fn list_error_status_is_an_error() {
            let mut server = Server::new_async().await;
            let _m = server
                .mock("GET", "/tasks/list")
                .with_status(500)
                .with_body(r#"{"code": 500, "message": "Internal server error"}"#)
                .create_async()
                .await;

            let err = backend_for(&server).list_tasks().await.unwrap_err();
            assert_eq!(err, ApiError::Status(500));
        }

        #[tokio::test]
        async fn list_decodes_tasks() {
            let mut server = Server::new_async().await;
            let _m = server
                .mock("GET", "/tasks/list")
                .with_status(200)
                .with_body(
                    r#"{"tasks": [{"id": 3, "target": "/tmp/x/a.pdf", "added_on": "2024-05-01 10:00:00",
                        "category": "file", "status": "pending", "priority": 1}]}"#,
                )
                .create_async()
                .await;

            let list = backend_for(&server).list_tasks().await.unwrap();
            assert_eq!(list.tasks.len(), 1);
            assert_eq!(list.tasks[0].file_name(), "a.pdf");
        }

        #[tokio::test]
        async fn missing_report_is_an_error() {
            let mut server = Server::new_async().await;
            let _m = server
                .mock("GET", "/tasks/report/3")
                .with_status(404)
                .with_body(r#"{"message": "Report not found"}"#)
                .create_async()
                .await;

            let err = backend_for(&server).report_score(3).await.unwrap_err();
            assert_eq!(err, ApiError::Status(404));
        }

        #[tokio::test]
        async fn report_score_reads_info_score() {
            let mut server = Server::new_async().await;
            let _m = server
                .mock("GET", "/tasks/report/5")
                .with_status(200)
                .with_body(r#"{"info": {"score": 6.5}}"#)
                .create_async()
                .await;

            let score = backend_for(&server).report_score(5).await.unwrap();
            assert!((score - 6.5).abs() < f64::EPSILON);
        }

        #[tokio::test]
        async fn refresh_shows_unreported_task_as_pending() {
            let mut server = Server::new_async().await;
            let _list = server
                .mock("GET", "/tasks/list")
                .with_status(200)
                .with_body(
                    r#"{"tasks": [{"id": 3, "target": "http://evil.test/dropper", "added_on": "2024-05-01 10:00:00",
                        "category": "url", "status": "running"}]}"#,
                )
                .create_async()
                .await;
            let report = server
                .mock("GET", "/tasks/report/3")
                .with_status(404)
                .expect(1)
                .create_async()
                .await;

            let records = refresh_tasks(&backend_for(&server)).await.unwrap();

            report.assert_async().await;
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].file_name, "dropper");
            assert_eq!(records[0].score, Score::Pending);
            assert_eq!(records[0].report_url, None);
        }
    }
}
