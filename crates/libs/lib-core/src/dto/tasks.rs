//! # Task Argument Bundles
//!
//! Bundles for the `task_manager.*` procedures. Lookups by id reuse
//! [`IdArgs`](super::bank::IdArgs).

use super::coerce::parse_int_str;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Bundle for `task_manager.set_task_metadata`: the path id plus the whole body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetTaskMetadataArgs {
    pub task_id: Option<i64>,
    pub metadata_info: Value,
}

impl SetTaskMetadataArgs {
    pub fn new(task_segment: &str, body: Value) -> Self {
        Self {
            task_id: parse_int_str(task_segment),
            metadata_info: body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn metadata_wraps_body_with_task_id() {
        let args = SetTaskMetadataArgs::new("5", json!({ "priority": "high" }));
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({ "task_id": 5, "metadata_info": { "priority": "high" } })
        );
    }

    #[test]
    fn metadata_with_bad_task_id_sends_null() {
        let args = SetTaskMetadataArgs::new("five", json!([]));
        assert_eq!(args.task_id, None);
        assert_eq!(args.metadata_info, json!([]));
    }
}
