//! # Request Stamping Middleware
//!
//! Gives every request an id and a receive time so that log lines from the
//! handler, the invoker, and the error translator can be correlated.
//!
//! The id is stored in request extensions as [`RequestStamp`] and echoed back
//! in the `X-Request-ID` response header.

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use lib_utils::now_utc;
use uuid::Uuid;

/// Response header carrying the request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request metadata for tracing and debugging.
#[derive(Clone, Debug)]
pub struct RequestStamp {
    /// Unique request identifier
    pub id: String,
    /// Time the request entered the gateway
    pub received_at: DateTime<Utc>,
}

impl RequestStamp {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            received_at: now_utc(),
        }
    }
}

/// Request stamping middleware.
pub async fn stamp_req(mut req: Request, next: Next) -> Response {
    let stamp = RequestStamp::new();
    req.extensions_mut().insert(stamp.clone());

    let mut res = next.run(req).await;

    if let Ok(header_value) = HeaderValue::from_str(&stamp.id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, header_value);
    }

    res
}
