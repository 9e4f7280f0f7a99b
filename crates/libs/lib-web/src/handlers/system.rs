//! # System Handlers
//!
//! Endpoints that never touch the database: service descriptors, liveness, and
//! the fallback for unmatched routes.

use axum::Json;
use lib_core::AppError;
use serde::Serialize;
use std::collections::BTreeMap;

/// Version reported by the service descriptors.
pub const API_VERSION: &str = "1.0.0";

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

impl ServiceInfo {
    fn new(message: &'static str, endpoints: &[(&'static str, &'static str)]) -> Self {
        Self {
            message,
            version: API_VERSION,
            endpoints: endpoints.iter().copied().collect(),
        }
    }
}

/// `GET /` on the ledger gateway.
pub async fn bank_index() -> Json<ServiceInfo> {
    Json(ServiceInfo::new(
        "Bank Simulator API is running",
        &[
            ("customers", "/customers/"),
            ("accounts", "/accounts/"),
            ("transactions", "/transactions/"),
        ],
    ))
}

/// `GET /` on the task gateway.
pub async fn task_index() -> Json<ServiceInfo> {
    Json(ServiceInfo::new(
        "Task Manager API is running",
        &[("tasks", "/tasks"), ("categories", "/categories")],
    ))
}

/// `GET /health`
pub async fn health() -> &'static str {
    "OK"
}

/// Unmatched path or method.
pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
