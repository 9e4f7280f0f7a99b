//! # Remote Procedure Invoker
//!
//! Wraps a [`ProcedureStore`] with the gateway's calling convention:
//!
//! 1. the procedure name must be non-empty;
//! 2. a missing (or JSON `null`) argument bundle is sent as `{}`;
//! 3. exactly one store call is made, with no retries;
//! 4. an envelope with `result_code >= 400` is raised as
//!    [`AppError::Application`], anything else is returned.
//!
//! Transport failures from the store pass through untouched.

use crate::error::{AppError, Result};
use crate::model::rpc::ResultEnvelope;
use crate::model::store::ProcedureStore;
use lib_utils::validation::validate_not_empty;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Invokes named procedures through the generic `api.call` entry point.
#[derive(Clone)]
pub struct Invoker {
    store: Arc<dyn ProcedureStore>,
}

impl Invoker {
    pub fn new(store: Arc<dyn ProcedureStore>) -> Self {
        Self { store }
    }

    /// Invoke `procedure` with `args` and return its envelope.
    ///
    /// # Errors
    ///
    /// - [`AppError::Application`] when the procedure reports `result_code >= 400`
    /// - [`AppError::Transport`] when the round trip fails
    /// - [`AppError::Internal`] when `procedure` is empty
    #[instrument(name = "invoke", skip_all, fields(procedure = %procedure))]
    pub async fn invoke(&self, procedure: &str, args: Option<Value>) -> Result<ResultEnvelope> {
        validate_not_empty(procedure, "procedure name").map_err(AppError::Internal)?;

        let args = normalize_args(args);
        debug!(args = %args, "[RPC] Invoking");

        let envelope = self.store.call(procedure, &args).await?;

        if envelope.is_failure() {
            warn!(
                result_code = envelope.result_code,
                result_message = ?envelope.result_message,
                "[RPC] Procedure reported failure"
            );
        } else {
            debug!(result_code = envelope.result_code, "[RPC] Procedure succeeded");
        }

        envelope.into_result()
    }

    /// Drain the underlying store.
    pub async fn close(&self) {
        self.store.close().await;
    }
}

/// The bundle actually sent downstream: never `null`.
pub fn normalize_args(args: Option<Value>) -> Value {
    match args {
        None | Some(Value::Null) => Value::Object(Map::new()),
        Some(args) => args,
    }
}

// endregion: --- Tests
