//! # Procedure Store
//!
//! The connection provider behind the invoker. The gateway only ever needs
//! "acquire a handle, run one parameterized query, release the handle", so the
//! seam is a single [`ProcedureStore::call`].
//!
//! The production implementation is [`PgProcedureStore`], a bounded `sqlx`
//! Postgres pool built explicitly at startup and handed to the server.

// region: --- Modules
pub mod pg_store;
// endregion: --- Modules

// region: --- Re-exports
pub use pg_store::{create_pool, DbPool, PgProcedureStore, CALL_QUERY};
// endregion: --- Re-exports

// region: --- Types and Functions
use crate::error::Result;
use crate::model::rpc::ResultEnvelope;
use async_trait::async_trait;
use serde_json::Value;

/// Anything able to run `api.call(procedure, args)` once and return its row.
///
/// Implementations must release whatever handle they acquire on every exit
/// path, including errors and timeouts.
#[async_trait]
pub trait ProcedureStore: Send + Sync {
    /// Run one invocation and return the raw envelope.
    ///
    /// Failure codes inside the envelope are *not* errors at this level; only
    /// failures to complete the round trip are.
    async fn call(&self, procedure: &str, args: &Value) -> Result<ResultEnvelope>;

    /// Drain the store. Called once after the server stops accepting requests.
    async fn close(&self) {}
}
// endregion: --- Types and Functions
