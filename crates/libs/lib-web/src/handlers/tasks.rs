//! # Task Handlers
//!
//! One handler per `task_manager.*` procedure.
//!
//! ## Endpoints
//!
//! - `GET  /tasks` - `task_manager.get_all_tasks`
//! - `GET  /tasks/{task_id}` - `task_manager.get_task`
//! - `POST /tasks` - `task_manager.create_task` (201)
//! - `POST /tasks/{task_id}/metadata` - `task_manager.set_task_metadata` (201)
//! - `GET  /categories` - `task_manager.get_all_categories`
//! - `GET  /categories/{category_id}` - `task_manager.get_category`

use crate::dispatch::dispatch;
use crate::extract::JsonBody;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use lib_core::dto::{IdArgs, SetTaskMetadataArgs};
use lib_core::{Invoker, Result, TaskOperation};
use serde_json::Value;
use tracing::instrument;

type Reply = Result<(StatusCode, Json<Value>)>;

#[instrument(skip_all)]
pub async fn get_all_tasks(State(invoker): State<Invoker>) -> Reply {
    dispatch(&invoker, TaskOperation::GetAllTasks).await
}

#[instrument(skip_all, fields(task_id = %task_id))]
pub async fn get_task(State(invoker): State<Invoker>, Path(task_id): Path<String>) -> Reply {
    dispatch(&invoker, TaskOperation::GetTask(IdArgs::from_path(&task_id))).await
}

#[instrument(skip_all)]
pub async fn create_task(State(invoker): State<Invoker>, JsonBody(body): JsonBody) -> Reply {
    dispatch(&invoker, TaskOperation::CreateTask(body)).await
}

#[instrument(skip_all, fields(task_id = %task_id))]
pub async fn set_task_metadata(
    State(invoker): State<Invoker>,
    Path(task_id): Path<String>,
    JsonBody(body): JsonBody,
) -> Reply {
    let args = SetTaskMetadataArgs::new(&task_id, body);
    dispatch(&invoker, TaskOperation::SetTaskMetadata(args)).await
}

#[instrument(skip_all)]
pub async fn get_all_categories(State(invoker): State<Invoker>) -> Reply {
    dispatch(&invoker, TaskOperation::GetAllCategories).await
}

#[instrument(skip_all, fields(category_id = %category_id))]
pub async fn get_category(
    State(invoker): State<Invoker>,
    Path(category_id): Path<String>,
) -> Reply {
    dispatch(&invoker, TaskOperation::GetCategory(IdArgs::from_path(&category_id))).await
}
