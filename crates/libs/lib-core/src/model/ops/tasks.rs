//! # Task Operations
//!
//! The `task_manager.*` procedures exposed by the task gateway.

use crate::dto::{IdArgs, SetTaskMetadataArgs};
use crate::error::Result;
use crate::model::rpc::Operation;
use axum::http::StatusCode;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum TaskOperation {
    GetAllTasks,
    GetTask(IdArgs),
    /// Request body forwarded verbatim
    CreateTask(Value),
    SetTaskMetadata(SetTaskMetadataArgs),
    GetAllCategories,
    GetCategory(IdArgs),
}

impl Operation for TaskOperation {
    fn procedure(&self) -> &'static str {
        match self {
            Self::GetAllTasks => "task_manager.get_all_tasks",
            Self::GetTask(_) => "task_manager.get_task",
            Self::CreateTask(_) => "task_manager.create_task",
            Self::SetTaskMetadata(_) => "task_manager.set_task_metadata",
            Self::GetAllCategories => "task_manager.get_all_categories",
            Self::GetCategory(_) => "task_manager.get_category",
        }
    }

    fn success_status(&self) -> StatusCode {
        match self {
            Self::CreateTask(_) | Self::SetTaskMetadata(_) => StatusCode::CREATED,
            Self::GetAllTasks
            | Self::GetTask(_)
            | Self::GetAllCategories
            | Self::GetCategory(_) => {
                StatusCode::OK
            }
        }
    }

    fn into_args(self) -> Result<Option<Value>> {
        Ok(match self {
            Self::GetAllTasks | Self::GetAllCategories => None,
            Self::GetTask(args) | Self::GetCategory(args) => Some(serde_json::to_value(args)?),
            Self::CreateTask(body) => Some(body),
            Self::SetTaskMetadata(args) => Some(serde_json::to_value(args)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn metadata_is_a_create() {
        let op = TaskOperation::SetTaskMetadata(SetTaskMetadataArgs::new("1", json!({})));
        assert_eq!(op.procedure(), "task_manager.set_task_metadata");
        assert_eq!(op.success_status(), StatusCode::CREATED);
    }

    #[test]
    fn lookups_send_id_bundle() {
        let op = TaskOperation::GetCategory(IdArgs::from_path("3"));
        assert_eq!(op.success_status(), StatusCode::OK);
        assert_eq!(op.into_args().unwrap(), Some(json!({ "id": 3 })));
    }
}
