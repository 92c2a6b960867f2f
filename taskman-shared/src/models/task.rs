/// Task model and database operations
///
/// A task is the only persisted entity. Its id is assigned by the store
/// and never supplied by callers; every other field is replaced wholesale
/// on update. There is no soft delete and no versioning.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE task_status AS ENUM ('pending', 'completed');
///
/// CREATE TABLE tasks (
///     id BIGSERIAL PRIMARY KEY,
///     title TEXT NOT NULL,
///     description TEXT,
///     status task_status NOT NULL DEFAULT 'pending',
///     date DATE
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskman_shared::models::task::{CreateTask, Task, TaskStatus};
/// use taskman_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let task = Task::create(&pool, CreateTask {
///     title: "Water the plants".to_string(),
///     description: Some("Balcony first".to_string()),
///     status: TaskStatus::Pending,
///     date: None,
/// }).await?;
///
/// assert_eq!(task.status, TaskStatus::Pending);
/// # Ok(())
/// # }
/// ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Completion state of a task
///
/// A task is either open or done; there are no intermediate states and
/// no transition rules — the client flips this as a checkbox.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Task has not been completed yet (the default for new tasks)
    #[default]
    Pending,

    /// Task has been marked as done
    Completed,
}

impl TaskStatus {
    /// Converts the status to its wire/storage string
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }

    /// Returns the opposite status (checkbox semantics)
    pub fn toggled(&self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }
}

/// A persisted task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Store-assigned id, immutable for the lifetime of the row
    pub id: i64,

    /// Short label shown in the list
    pub title: String,

    /// Free-form details (optional)
    pub description: Option<String>,

    /// Completion state
    pub status: TaskStatus,

    /// Due date, if any. Transmitted as an ISO calendar date; lenient on
    /// input (see [`crate::dates`]).
    #[serde(default, deserialize_with = "crate::dates::deserialize_calendar_date")]
    pub date: Option<NaiveDate>,
}

/// Input for creating a new task
///
/// Every field is defaulted so a sparse body is accepted as-is. In
/// particular an absent or empty title is NOT rejected here: the only
/// title gate in the system is the client-side submit guard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTask {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub status: TaskStatus,

    #[serde(default, deserialize_with = "crate::dates::deserialize_calendar_date")]
    pub date: Option<NaiveDate>,
}

/// Input for updating a task
///
/// Updates replace all four mutable fields of the addressed row; there is
/// no partial patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub status: TaskStatus,

    #[serde(default, deserialize_with = "crate::dates::deserialize_calendar_date")]
    pub date: Option<NaiveDate>,
}

/// Store acknowledgment for update and delete operations
///
/// `rows_affected` may be zero when the addressed id does not exist; that
/// is still a successful outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteAck {
    pub rows_affected: u64,
}

impl Task {
    /// Lists every task in store-native order
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, title, description, status, date FROM tasks",
        )
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Inserts a new task and returns the stored row, including the
    /// store-assigned id
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description, status, date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, status, date
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.status)
        .bind(data.date)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Replaces all mutable fields of the task with the given id
    ///
    /// Returns the number of rows affected (0 when the id does not
    /// exist — not an error).
    pub async fn update(pool: &PgPool, id: i64, data: UpdateTask) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tasks SET title = $1, description = $2, status = $3, date = $4 WHERE id = $5",
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.status)
        .bind(data.date)
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes the task with the given id
    ///
    /// Returns the number of rows affected; deleting a missing id is a
    /// no-op, not an error.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
