/// Task CRUD endpoints
///
/// Each handler is one parameterized statement against the store — no
/// transactions, no cross-request state, last write wins on concurrent
/// updates to the same id.
///
/// # Endpoints
///
/// ```text
/// GET    /tasks      → full task list (store-native order)
/// POST   /tasks      → insert; returns the created row with its new id
/// PUT    /tasks/:id  → replace title/description/status/date
/// DELETE /tasks/:id  → remove the row; missing id is a no-op
/// ```
///
/// Update and delete respond with `{"rows_affected": n}`; `n == 0` (id
/// not present) is still a success. Creation does not reject an empty
/// title — the only title gate in the system is client-side.

use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{Path, State},
    Json,
};
use taskman_shared::models::task::{CreateTask, Task, UpdateTask, WriteAck};

/// List handler
///
/// Returns every task. A store failure is serialized into the JSON error
/// body instead of the data — the request always completes.
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list(&state.db).await?;

    tracing::debug!(count = tasks.len(), "Listed tasks");

    Ok(Json(tasks))
}

/// Create handler
///
/// Inserts one row and returns it, including the store-assigned id.
pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<CreateTask>,
) -> ApiResult<Json<Task>> {
    tracing::info!(title = %payload.title, status = ?payload.status, "Creating task");

    let task = Task::create(&state.db, payload).await?;

    tracing::info!(task_id = task.id, "Task created");

    Ok(Json(task))
}

/// Update handler
///
/// Replaces all four mutable fields of the addressed row. A zero-row
/// update (unknown id) is not distinguished from success.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTask>,
) -> ApiResult<Json<WriteAck>> {
    tracing::info!(task_id = id, "Updating task");

    let rows_affected = Task::update(&state.db, id, payload).await?;

    Ok(Json(WriteAck { rows_affected }))
}

/// Delete handler
///
/// Removes the addressed row. Deleting a missing id succeeds with zero
/// rows affected.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<WriteAck>> {
    tracing::info!(task_id = id, "Deleting task");

    let rows_affected = Task::delete(&state.db, id).await?;

    Ok(Json(WriteAck { rows_affected }))
}
