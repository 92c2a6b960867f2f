/// HTTP transport for the task API
///
/// A thin reqwest wrapper around the five routes of the service. One
/// request per operation, JSON bodies, no retries, no authentication,
/// and no timeout policy — a hung call stays pending until the transport
/// gives up, and is never re-issued.
///
/// The client is `Clone` and reuses pooled connections across requests.
///
/// # Example
///
/// ```no_run
/// use taskman_client::http::TasksClient;
/// use taskman_shared::models::task::CreateTask;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TasksClient::new("http://127.0.0.1:8800")?;
///
/// let created = client.create(&CreateTask {
///     title: "Water the plants".to_string(),
///     ..Default::default()
/// }).await?;
///
/// let tasks = client.list().await?;
/// assert!(tasks.iter().any(|t| t.id == created.id));
/// # Ok(())
/// # }
/// ```

use crate::error::{ClientError, ClientResult};
use reqwest::Client;
use taskman_shared::models::task::{CreateTask, Task, UpdateTask, WriteAck};
use tracing::debug;
use url::Url;

/// Task API client
#[derive(Debug, Clone)]
pub struct TasksClient {
    /// Base URL of the task API
    base_url: Url,

    /// HTTP client
    http: Client,
}

impl TasksClient {
    /// Creates a new client for the given API base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot
    /// be constructed.
    pub fn new(base_url: impl AsRef<str>) -> ClientResult<Self> {
        let base_url = Url::parse(base_url.as_ref())?;

        let http = Client::builder()
            .user_agent(format!("taskman-client/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { base_url, http })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a URL for an endpoint
    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Checks liveness: `GET /` returns the literal string "hello"
    pub async fn hello(&self) -> ClientResult<String> {
        let url = self.endpoint("/")?;
        debug!(url = %url, "Pinging API");

        let response = check(self.http.get(url).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Fetches the full task list
    pub async fn list(&self) -> ClientResult<Vec<Task>> {
        let url = self.endpoint("/tasks")?;
        debug!(url = %url, "Fetching task list");

        let response = check(self.http.get(url).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Creates a task and returns the stored row with its new id
    pub async fn create(&self, payload: &CreateTask) -> ClientResult<Task> {
        let url = self.endpoint("/tasks")?;
        debug!(url = %url, title = %payload.title, "Creating task");

        let response = check(self.http.post(url).json(payload).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Replaces all mutable fields of the task with the given id
    pub async fn update(&self, id: i64, payload: &UpdateTask) -> ClientResult<WriteAck> {
        let url = self.endpoint(&format!("/tasks/{}", id))?;
        debug!(url = %url, task_id = id, "Updating task");

        let response = check(self.http.put(url).json(payload).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Deletes the task with the given id
    pub async fn delete(&self, id: i64) -> ClientResult<WriteAck> {
        let url = self.endpoint(&format!("/tasks/{}", id))?;
        debug!(url = %url, task_id = id, "Deleting task");

        let response = check(self.http.delete(url).send().await?).await?;
        Ok(response.json().await?)
    }
}

/// Maps a non-success response to [`ClientError::Api`], keeping whatever
/// body the server sent (the API serializes failures as JSON).
async fn check(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Api { status, body })
}
