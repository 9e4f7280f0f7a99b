//! # Dispatch
//!
//! The one code path every route handler goes through:
//!
//! ```text
//! Operation → procedure name + bundle → Invoker → envelope → (status, result_data)
//!                                                     ↘ Err(AppError) → Error Translator
//! ```
//!
//! Handlers only build the [`Operation`]; they never write a response
//! themselves, so a failure is never half-written.

use axum::{http::StatusCode, Json};
use lib_core::{Invoker, Operation, Result};
use serde_json::Value;
use tracing::debug;

/// Run `operation` through `invoker` and map the outcome to a response.
///
/// On success the body is the envelope's `result_data`, verbatim, with the
/// operation's declared status. Every failure is returned as `Err` for the
/// error translator.
pub async fn dispatch<O: Operation>(
    invoker: &Invoker,
    operation: O,
) -> Result<(StatusCode, Json<Value>)> {
    let procedure = operation.procedure();
    let status = operation.success_status();
    let args = operation.into_args()?;

    let envelope = invoker.invoke(procedure, args).await?;
    debug!(procedure, status = status.as_u16(), "[DISPATCH] Responding");

    Ok((status, Json(envelope.into_data())))
}
