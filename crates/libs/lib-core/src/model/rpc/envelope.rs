//! # Result Envelope
//!
//! The single row every `api.call` invocation returns:
//!
//! ```text
//! result_code    int    HTTP-status-like; < 400 success, >= 400 failure
//! result_message text   present on failure
//! result_data    jsonb  success payload (object, array, scalar or null)
//! ```

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Codes at or above this value are application failures.
pub const FAILURE_THRESHOLD: i32 = 400;

/// Decoded result of one procedure invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub result_code: i32,
    #[serde(default)]
    pub result_message: Option<String>,
    #[serde(default)]
    pub result_data: Value,
}

impl ResultEnvelope {
    /// Successful envelope carrying `data`.
    pub fn success(code: i32, data: Value) -> Self {
        Self {
            result_code: code,
            result_message: None,
            result_data: data,
        }
    }

    /// Failed envelope carrying `message`.
    pub fn failure(code: i32, message: impl Into<String>) -> Self {
        Self {
            result_code: code,
            result_message: Some(message.into()),
            result_data: Value::Null,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.result_code >= FAILURE_THRESHOLD
    }

    /// Split the envelope into the returned/raised outcome.
    ///
    /// A failure code becomes [`AppError::Application`] carrying the code and the
    /// message verbatim.
    pub fn into_result(self) -> Result<Self> {
        if self.is_failure() {
            return Err(AppError::Application {
                code: self.result_code,
                message: self.result_message.unwrap_or_default(),
            });
        }
        Ok(self)
    }

    /// The success payload.
    pub fn into_data(self) -> Value {
        self.result_data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn codes_below_400_are_returned() {
        let envelope = ResultEnvelope::success(201, json!({ "account_number": "ACC123" }));
        let returned = envelope.clone().into_result().unwrap();
        assert_eq!(returned, envelope);
        assert_eq!(returned.into_data(), json!({ "account_number": "ACC123" }));
    }

    #[test]
    fn code_400_is_the_first_failure() {
        let err = ResultEnvelope::failure(400, "Bad amount").into_result().unwrap_err();
        assert!(matches!(
            err,
            AppError::Application { code: 400, ref message } if message == "Bad amount"
        ));
        assert!(!ResultEnvelope::success(399, Value::Null).is_failure());
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let envelope: ResultEnvelope =
            serde_json::from_value(json!({ "result_code": 200 })).unwrap();
        assert_eq!(envelope.result_message, None);
        assert_eq!(envelope.result_data, Value::Null);
    }
}
