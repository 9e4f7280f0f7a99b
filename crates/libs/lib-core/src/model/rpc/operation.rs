//! # Operations
//!
//! An [`Operation`] is one fully extracted route call: it knows which procedure
//! it targets, which status a success maps to, and how to turn itself into the
//! argument bundle. The gateway instances implement it on closed enums with one
//! variant per route, so a route without a procedure or status cannot compile.

use crate::error::Result;
use axum::http::StatusCode;
use serde_json::Value;

pub trait Operation {
    /// Fully qualified procedure name (`namespace.function`).
    fn procedure(&self) -> &'static str;

    /// Status written when the procedure succeeds.
    fn success_status(&self) -> StatusCode;

    /// The argument bundle, or `None` when the procedure takes no arguments.
    fn into_args(self) -> Result<Option<Value>>;
}
