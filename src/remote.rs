use async_trait::async_trait;

use crate::config::RemoteConfig;
use crate::models::{CreatedTask, Task, TaskFields, TaskId, TaskPage};

#[derive(Debug)]
pub enum ServiceError {
    /// Transport-level failure, including timeouts and body decode errors.
    Transport(reqwest::Error),
    /// The service answered with a non-2xx status.
    Status(reqwest::StatusCode),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Transport(err) => write!(f, "transport error: {err}"),
            ServiceError::Status(code) => write!(f, "http status {code}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<reqwest::Error> for ServiceError {
    fn from(value: reqwest::Error) -> Self {
        ServiceError::Transport(value)
    }
}

/// The remote task resource. The production implementation speaks HTTP; tests
/// substitute their own.
#[async_trait]
pub trait RemoteTaskService: Send + Sync {
    /// Fetches one fixed-size page of tasks.
    async fn list(&self) -> Result<Vec<Task>, ServiceError>;

    /// Creates a task and returns the id the service assigned.
    async fn create(&self, fields: &TaskFields) -> Result<TaskId, ServiceError>;

    /// Overwrites the editable fields of an existing task. The response body
    /// is ignored.
    async fn update(&self, id: TaskId, fields: &TaskFields) -> Result<(), ServiceError>;

    /// Deletes a task. The response body is ignored.
    async fn delete(&self, id: TaskId) -> Result<(), ServiceError>;
}

pub struct HttpTaskService {
    client: reqwest::Client,
    config: RemoteConfig,
}

impl HttpTaskService {
    pub fn new(config: RemoteConfig) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn collection_url(&self) -> String {
        format!("{}/tasks", self.config.base_url.trim_end_matches('/'))
    }

    fn item_url(&self, id: TaskId) -> String {
        format!("{}/{id}", self.collection_url())
    }
}

fn accepted(resp: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ServiceError::Status(status));
    }
    Ok(resp)
}

#[async_trait]
impl RemoteTaskService for HttpTaskService {
    async fn list(&self) -> Result<Vec<Task>, ServiceError> {
        let resp = self
            .client
            .get(self.collection_url())
            .query(&[("per_page", self.config.page_size)])
            .send()
            .await?;
        let page: TaskPage = accepted(resp)?.json().await?;
        Ok(page.data)
    }

    async fn create(&self, fields: &TaskFields) -> Result<TaskId, ServiceError> {
        let resp = self
            .client
            .post(self.collection_url())
            .json(fields)
            .send()
            .await?;
        let created: CreatedTask = accepted(resp)?.json().await?;
        Ok(created.id)
    }

    async fn update(&self, id: TaskId, fields: &TaskFields) -> Result<(), ServiceError> {
        let resp = self
            .client
            .put(self.item_url(id))
            .json(fields)
            .send()
            .await?;
        accepted(resp)?;
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> Result<(), ServiceError> {
        let resp = self.client.delete(self.item_url(id)).send().await?;
        accepted(resp)?;
        Ok(())
    }
}
