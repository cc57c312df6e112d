use axum::extract::{FromRequest, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde_derive::Serialize;
use tracing::{error, info};

use crate::model::{CorrelationId, NewTask, Task, TaskPatch};

use super::error::{ApiError, HealthCheckFailed};
use super::AppState;

/// JSON body extractor that keeps rejections in the `{error}` response
/// shape instead of axum's plain-text default.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub message: String,
}

fn parse_task_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::Validation(format!("invalid task id '{}'", raw)))
}

fn correlation_id(headers: &HeaderMap) -> CorrelationId {
    // absent or malformed ids degrade to nil, never to a request failure
    CorrelationId::from_header_map(headers).unwrap_or_default()
}

pub async fn health(State(state): State<AppState>) -> Result<Json<HealthStatus>, HealthCheckFailed> {
    match state.store.ping().await {
        Ok(()) => Ok(Json(HealthStatus {
            status: "OK".to_string(),
            message: "task store connected".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        })),
        Err(err) => {
            error!(reason = %err, "Health check failed.");
            Err(HealthCheckFailed {
                error: "task store connection failed".to_string(),
                details: err.to_string(),
            })
        }
    }
}

pub async fn list_tasks(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Task>>, ApiError> {
    let cid = correlation_id(&headers);
    let tasks = state
        .store
        .list()
        .await
        .map_err(|err| ApiError::store("unable to fetch tasks", err))?;
    info!(correlation_id = %cid, count = tasks.len(), "Listed tasks.");
    Ok(Json(tasks))
}

pub async fn create_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(new_task): JsonBody<NewTask>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let cid = correlation_id(&headers);
    let title = new_task.validated_title()?;
    let task = state
        .store
        .insert(&title)
        .await
        .map_err(|err| ApiError::store("unable to create task", err))?;
    info!(correlation_id = %cid, id = task.id, "Created task.");
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    JsonBody(patch): JsonBody<TaskPatch>,
) -> Result<Json<Task>, ApiError> {
    let cid = correlation_id(&headers);
    let id = parse_task_id(&id)?;
    let task = state
        .store
        .update(id, &patch)
        .await
        .map_err(|err| ApiError::store("unable to update task", err))?
        .ok_or(ApiError::NotFound)?;
    info!(correlation_id = %cid, id, "Updated task.");
    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Deleted>, ApiError> {
    let cid = correlation_id(&headers);
    let id = parse_task_id(&id)?;
    let deleted = state
        .store
        .delete(id)
        .await
        .map_err(|err| ApiError::store("unable to delete task", err))?;
    if !deleted {
        return Err(ApiError::NotFound);
    }
    info!(correlation_id = %cid, id, "Deleted task.");
    Ok(Json(Deleted {
        message: "task deleted".to_string(),
    }))
}
