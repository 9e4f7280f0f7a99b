//! # Request Body Extraction
//!
//! [`JsonBody`] reads the request body as an untyped JSON value so that route
//! rules can pick and coerce fields themselves.
//!
//! - An empty (or whitespace-only) body is read as `{}`.
//! - The `Content-Type` header is not checked.
//! - A body that is not JSON is rejected with [`AppError::InvalidInput`] (400),
//!   written in the usual `{ "error": ... }` shape.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use lib_core::AppError;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;

        parse_body(&bytes).map(JsonBody)
    }
}

/// Parse raw body bytes with the rules above.
pub fn parse_body(bytes: &[u8]) -> Result<Value, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_slice(bytes)
        .map_err(|e| AppError::InvalidInput(format!("Invalid JSON body: {}", e)))
}
