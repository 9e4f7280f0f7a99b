//! # Postgres Procedure Store
//!
//! Runs every invocation through one fixed, fully parameterized statement:
//!
//! ```sql
//! SELECT result_code, result_message, result_data FROM api.call($1, $2::jsonb)
//! ```
//!
//! The procedure name and the argument bundle are always bound parameters and
//! are never spliced into the SQL text.
//!
//! ## Handle discipline
//!
//! A handle is taken with `pool.acquire()` and held as a `PoolConnection`,
//! which returns itself to the pool when dropped. It is dropped at the end of
//! [`PgProcedureStore::call`] on success, on query error, and when the call
//! future is cancelled by the timeout.

use super::ProcedureStore;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::model::rpc::ResultEnvelope;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Type alias for the Postgres connection pool.
pub type DbPool = PgPool;

/// The single statement the gateway ever sends.
pub const CALL_QUERY: &str =
    "SELECT result_code, result_message, result_data FROM api.call($1, $2::jsonb)";

/// Create a bounded, lazily connecting pool from the gateway config.
///
/// No connection is opened here; the first request (or [`PgProcedureStore::ping`])
/// does that.
pub fn create_pool(config: &Config) -> DbPool {
    let options = PgConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .database(&config.db_name)
        .username(&config.db_user)
        .password(&config.db_password);

    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout)
        .connect_lazy_with(options)
}

#[derive(Debug, FromRow)]
struct EnvelopeRow {
    result_code: i32,
    result_message: Option<String>,
    result_data: Option<Json<Value>>,
}

impl From<EnvelopeRow> for ResultEnvelope {
    fn from(row: EnvelopeRow) -> Self {
        ResultEnvelope {
            result_code: row.result_code,
            result_message: row.result_message,
            result_data: row.result_data.map(|Json(data)| data).unwrap_or(Value::Null),
        }
    }
}

/// [`ProcedureStore`] backed by a Postgres pool.
#[derive(Clone, Debug)]
pub struct PgProcedureStore {
    pool: DbPool,
    call_timeout: Duration,
}

impl PgProcedureStore {
    pub fn new(pool: DbPool, call_timeout: Duration) -> Self {
        Self { pool, call_timeout }
    }

    /// Build the pool from `config` without connecting.
    pub fn connect_lazy(config: &Config) -> Self {
        Self::new(create_pool(config), config.db_call_timeout)
    }

    /// Number of handles currently checked out of the pool.
    pub fn outstanding(&self) -> usize {
        (self.pool.size() as usize).saturating_sub(self.pool.num_idle())
    }

    /// Open one connection and run a trivial statement.
    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }

    async fn round_trip(&self, procedure: &str, args: &Value) -> Result<ResultEnvelope> {
        let mut conn = self.pool.acquire().await?;

        let row: EnvelopeRow = sqlx::query_as(CALL_QUERY)
            .bind(procedure)
            .bind(Json(args))
            .fetch_one(&mut *conn)
            .await?;

        Ok(row.into())
    }
}

#[async_trait]
impl ProcedureStore for PgProcedureStore {
    async fn call(&self, procedure: &str, args: &Value) -> Result<ResultEnvelope> {
        debug!(procedure, "[STORE] api.call");

        match tokio::time::timeout(self.call_timeout, self.round_trip(procedure, args)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    procedure,
                    timeout_ms = self.call_timeout.as_millis(),
                    "[STORE] Call timed out"
                );
                Err(AppError::Transport(format!(
                    "{} did not complete within {:?}",
                    procedure, self.call_timeout
                )))
            }
        }
    }

    async fn close(&self) {
        info!("[STORE] Draining connection pool");
        self.pool.close().await;
    }
}

// endregion: --- Tests
