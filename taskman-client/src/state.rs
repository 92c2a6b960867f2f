/// Per-view state containers
///
/// Three containers, one per view: the task list, the create form, and
/// the edit form. Each holds only its own state and receives the
/// transport as an argument — nothing here reaches into ambient context.
///
/// Synchronization with the store is wholesale: after every successful
/// mutation the list is re-fetched and replaced. There is no incremental
/// patching and no optimistic update.
///
/// Error surfacing is deliberately uneven, matching the interface this
/// mirrors: create and update failures set an `error` flag for the user,
/// while list-refresh and delete failures are only logged.

use crate::http::TasksClient;
use taskman_shared::dates::calendar_date;
use taskman_shared::models::task::{CreateTask, Task, TaskStatus, UpdateTask};
use tracing::warn;

/// Local mirror of the store's task list
#[derive(Debug, Default)]
pub struct TaskList {
    /// The last fetched snapshot, replaced wholesale on refresh
    pub tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-fetches the full list and replaces the local snapshot
    ///
    /// A failed fetch leaves the previous snapshot in place and is only
    /// logged.
    pub async fn refresh(&mut self, client: &TasksClient) {
        match client.list().await {
            Ok(tasks) => self.tasks = tasks,
            Err(e) => warn!(error = %e, "Failed to fetch tasks"),
        }
    }

    /// Deletes a task immediately — no confirmation step
    ///
    /// Refreshes the list on success. Failures are logged and not
    /// surfaced to the user.
    pub async fn delete(&mut self, client: &TasksClient, id: i64) {
        match client.delete(id).await {
            Ok(_) => self.refresh(client).await,
            Err(e) => warn!(task_id = id, error = %e, "Failed to delete task"),
        }
    }

    /// Finds a task in the current snapshot
    pub fn find(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }
}

/// Draft state for the create form
///
/// `date` carries the raw form value (`""` when unset) — conversion to a
/// calendar date happens at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub date: String,

    /// Set when the last submission failed; cleared by the reset on
    /// success
    pub error: bool,
}

impl Default for CreateDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: TaskStatus::Pending,
            date: String::new(),
            error: false,
        }
    }
}

impl CreateDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the draft may be submitted
    ///
    /// The empty-title gate lives here and only here; the API accepts an
    /// empty title if invoked directly.
    pub fn can_submit(&self) -> bool {
        !self.title.is_empty()
    }

    /// Flips the status checkbox
    pub fn toggle_status(&mut self) {
        self.status = self.status.toggled();
    }

    /// Converts the draft into a create payload
    pub fn payload(&self) -> CreateTask {
        CreateTask {
            title: self.title.clone(),
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
            status: self.status,
            date: calendar_date(&self.date),
        }
    }

    /// Submits the draft
    ///
    /// Never dispatches while the title is empty. On success the draft
    /// resets to empty defaults and the list is refreshed; on failure
    /// the error flag is set and the draft is preserved so the user can
    /// retry.
    ///
    /// Returns whether a task was created.
    pub async fn submit(&mut self, client: &TasksClient, list: &mut TaskList) -> bool {
        if !self.can_submit() {
            return false;
        }

        match client.create(&self.payload()).await {
            Ok(_) => {
                *self = Self::new();
                list.refresh(client).await;
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to create task");
                self.error = true;
                false
            }
        }
    }
}

/// Draft state for the edit form
///
/// Opened from an existing task; holds the full replacement payload
/// including the id. The caller owns the open/closed state (typically an
/// `Option<EditDraft>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub date: String,

    /// Set when the last submission failed; the editor stays open
    pub error: bool,
}

impl EditDraft {
    /// Copies a task into an editable draft
    ///
    /// The stored date becomes the date-input value (ISO calendar date,
    /// `""` when unset). The lenient wire parsing already resolved any
    /// timestamp against the local timezone, so the value shown here is
    /// the stored calendar date, not the UTC date.
    pub fn open(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: task.status,
            date: task.date.map(|d| d.to_string()).unwrap_or_default(),
            error: false,
        }
    }

    /// Flips the status checkbox
    pub fn toggle_status(&mut self) {
        self.status = self.status.toggled();
    }

    /// Converts the draft into an update payload
    pub fn payload(&self) -> UpdateTask {
        UpdateTask {
            title: self.title.clone(),
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
            status: self.status,
            date: calendar_date(&self.date),
        }
    }

    /// Submits the full draft to the update operation
    ///
    /// On success the list is refreshed and `true` is returned — the
    /// caller drops the draft, closing the editor. On failure the error
    /// flag is set and the draft is left intact.
    pub async fn submit(&mut self, client: &TasksClient, list: &mut TaskList) -> bool {
        match client.update(self.id, &self.payload()).await {
            Ok(_) => {
                list.refresh(client).await;
                true
            }
            Err(e) => {
                warn!(task_id = self.id, error = %e, "Failed to update task");
                self.error = true;
                false
            }
        }
    }
}
