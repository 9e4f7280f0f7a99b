//! # Core Library
//!
//! Configuration, error translation, the procedure store, the remote procedure
//! invoker, and the typed operations every route dispatches through.

pub mod config;
pub mod error;
pub mod model;
pub mod dto;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorBody, Result};
pub use model::rpc::{Invoker, Operation, ResultEnvelope};
pub use model::store::{DbPool, PgProcedureStore, ProcedureStore, create_pool};
pub use model::ops::{BankOperation, TaskOperation};
