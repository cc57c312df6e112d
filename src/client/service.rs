use http::HeaderMap;
use serde_json::json;

use super::error::ClientError;
use crate::model::{CorrelationId, Task, TaskPatch};

/// HTTP client for the task service.
///
/// One method per endpoint; no retries anywhere. Every call carries a fresh
/// correlation id so server-side logs can be tied back to a client action.
pub struct TaskService {
    base_url: String,
    client: reqwest::Client,
}

impl TaskService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        let base_url = std::env::var("TASKBOARD_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());
        Self::new(base_url)
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        let mut headers = HeaderMap::new();
        CorrelationId::generate().insert_into_header_map(&mut headers);

        let response = request.headers(headers).send().await?;
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ClientError::from_response(response).await)
        }
    }

    pub async fn health(&self) -> Result<(), ClientError> {
        self.send(self.client.get(format!("{}/health", self.base_url)))
            .await?;
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Task>, ClientError> {
        let response = self
            .send(self.client.get(format!("{}/api/tasks", self.base_url)))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn create(&self, title: &str) -> Result<Task, ClientError> {
        let response = self
            .send(
                self.client
                    .post(format!("{}/api/tasks", self.base_url))
                    .json(&json!({ "title": title })),
            )
            .await?;
        Ok(response.json().await?)
    }

    pub async fn update(&self, id: i64, patch: &TaskPatch) -> Result<Task, ClientError> {
        let response = self
            .send(
                self.client
                    .put(format!("{}/api/tasks/{}", self.base_url, id))
                    .json(patch),
            )
            .await?;
        Ok(response.json().await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.send(
            self.client
                .delete(format!("{}/api/tasks/{}", self.base_url, id)),
        )
        .await?;
        Ok(())
    }
}
