//! # HTTP Request Handlers
//!
//! Handlers are thin: extract, build an operation, [`dispatch`](crate::dispatch::dispatch).
//!
//! - **[`bank`]**: ledger gateway routes (`bank.*` procedures)
//! - **[`tasks`]**: task gateway routes (`task_manager.*` procedures)
//! - **[`system`]**: descriptors, health, fallback
//!
//! Handlers return `lib_core::Result<(StatusCode, Json<Value>)>`. The `Err`
//! side is rendered by `AppError`'s `IntoResponse` impl, which is the only
//! place error bodies are produced.

pub mod bank;
pub mod system;
pub mod tasks;

#[cfg(test)]
mod tests;
