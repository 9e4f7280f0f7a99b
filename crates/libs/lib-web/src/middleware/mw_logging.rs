//! # Request/Response Logging Middleware
//!
//! Logs every request on the way in and its status and latency on the way out.
//! Header values named in [`SENSITIVE_HEADERS`] are redacted. Bodies are never
//! logged here; the invoker logs argument bundles at `debug` level.

use crate::middleware::mw_req_stamp::RequestStamp;
use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use lib_utils::format_time;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Headers whose values are replaced before logging.
pub const SENSITIVE_HEADERS: &[&str] = &[
    "authorization",
    "cookie",
    "x-api-key",
    "x-auth-token",
];

/// Request/response logging middleware.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(|q| q.to_string());

    let (request_id, received_at) = req
        .extensions()
        .get::<RequestStamp>()
        .map(|s| (s.id.clone(), format_time(s.received_at)))
        .unwrap_or_else(|| ("unknown".to_string(), String::new()));

    let headers: Vec<(String, String)> = req
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            let name_lower = name.as_str().to_lowercase();
            if SENSITIVE_HEADERS.iter().any(|h| name_lower.contains(h)) {
                Some((name.to_string(), "***REDACTED***".to_string()))
            } else {
                value.to_str().ok().map(|v| (name.to_string(), v.to_string()))
            }
        })
        .collect();

    info!(
        request_id = %request_id,
        received_at = %received_at,
        method = %method,
        path = %path,
        query = ?query,
        "[REQUEST] {} {}",
        method,
        path
    );
    debug!(request_id = %request_id, headers = ?headers, "[REQUEST HEADERS]");

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status();
    let status_code = status.as_u16();

    if status.is_server_error() {
        error!(
            request_id = %request_id,
            status = status_code,
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} ({}ms) [SERVER ERROR]",
            method,
            path,
            status_code,
            duration.as_millis()
        );
    } else if status.is_client_error() {
        warn!(
            request_id = %request_id,
            status = status_code,
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} ({}ms) [CLIENT ERROR]",
            method,
            path,
            status_code,
            duration.as_millis()
        );
    } else {
        info!(
            request_id = %request_id,
            status = status_code,
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} ({}ms)",
            method,
            path,
            status_code,
            duration.as_millis()
        );
    }

    response
}
