//! # Routes
//!
//! Route tables for the two gateway instances and the middleware stack they
//! share. Collection routes are registered with and without the trailing slash
//! so `/customers` and `/customers/` reach the same handler.

use crate::handlers::{bank, system, tasks};
use crate::middleware::{log_requests, stamp_req, RequestStamp};
use crate::server::AppState;
use axum::{
    http::{header, HeaderValue, Method, Request, Response},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{classify::ServerErrorsFailureClass, cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Span};

/// Which gateway instance to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gateway {
    /// Ledger domain, `bank.*` procedures
    Bank,
    /// Task domain, `task_manager.*` procedures
    Task,
}

impl Gateway {
    pub fn name(&self) -> &'static str {
        match self {
            Gateway::Bank => "Bank Simulator API",
            Gateway::Task => "Task Manager API",
        }
    }

    /// Endpoint lines printed in the startup banner.
    pub fn endpoints(&self) -> &'static [&'static str] {
        match self {
            Gateway::Bank => &[
                "GET  /customers/",
                "GET  /customers/{id}",
                "POST /customers/",
                "GET  /customers/{id}/accounts",
                "GET  /accounts/{account_number}",
                "POST /accounts/",
                "POST /transactions/deposit",
                "POST /transactions/withdraw",
                "POST /transactions/transfer",
                "GET  /accounts/{account_number}/transactions",
            ],
            Gateway::Task => &[
                "GET  /tasks",
                "GET  /tasks/{task_id}",
                "POST /tasks",
                "POST /tasks/{task_id}/metadata",
                "GET  /categories",
                "GET  /categories/{category_id}",
            ],
        }
    }

    fn routes(&self) -> Router<AppState> {
        match self {
            Gateway::Bank => bank_routes(),
            Gateway::Task => task_routes(),
        }
    }
}

/// Routes of the ledger gateway.
pub fn bank_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(system::bank_index))
        .route(
            "/customers",
            get(bank::get_all_customers).post(bank::create_customer),
        )
        .route(
            "/customers/",
            get(bank::get_all_customers).post(bank::create_customer),
        )
        .route("/customers/{id}", get(bank::get_customer))
        .route("/customers/{id}/accounts", get(bank::get_customer_accounts))
        .route("/accounts", post(bank::create_account))
        .route("/accounts/", post(bank::create_account))
        .route(
            "/accounts/{account_number}",
            get(bank::get_account_by_number),
        )
        .route(
            "/accounts/{account_number}/transactions",
            get(bank::get_account_transactions),
        )
        .route("/transactions/deposit", post(bank::deposit))
        .route("/transactions/withdraw", post(bank::withdraw))
        .route("/transactions/transfer", post(bank::transfer))
}

/// Routes of the task gateway.
pub fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(system::task_index))
        .route("/tasks", get(tasks::get_all_tasks).post(tasks::create_task))
        .route(
            "/tasks/",
            get(tasks::get_all_tasks).post(tasks::create_task),
        )
        .route("/tasks/{task_id}", get(tasks::get_task))
        .route("/tasks/{task_id}/metadata", post(tasks::set_task_metadata))
        .route("/categories", get(tasks::get_all_categories))
        .route("/categories/", get(tasks::get_all_categories))
        .route("/categories/{category_id}", get(tasks::get_category))
}

/// Build the full application router for `gateway`.
pub fn create_router(gateway: Gateway, state: AppState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    info!("[ROUTE SETUP] Registering {} routes...", gateway.name());

    gateway
        .routes()
        .route("/health", get(system::health))
        .fallback(system::not_found)
        .method_not_allowed_fallback(system::not_found)
        .with_state(state)
        .layer(axum::middleware::from_fn(log_requests))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestStamp>()
                        .map(|s| s.id.clone())
                        .unwrap_or_else(|| "unknown".to_string());
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_failure(|error: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
                    tracing::error!(
                        error = ?error,
                        latency_ms = latency.as_millis(),
                        "[HTTP FAILURE] {:?}",
                        error
                    );
                })
                .on_response(|_response: &Response<_>, _latency: Duration, _span: &Span| {}),
        )
        // Outermost, so the id exists before the trace span and the logger run
        .layer(axum::middleware::from_fn(stamp_req))
        .layer(cors)
}
