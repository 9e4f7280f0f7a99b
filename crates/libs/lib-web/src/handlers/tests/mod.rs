//! # Handler Tests
//!
//! Routers are exercised in-process with `tower::ServiceExt::oneshot` against a
//! [`RecordingStore`], which records every `api.call` and tracks how many
//! handles are checked out at any moment.


use crate::routes::{create_router, Gateway};
use crate::server::AppState;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use lib_core::{AppError, Invoker, ProcedureStore, Result, ResultEnvelope};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

type Reply = Box<dyn Fn(&str, &Value) -> Result<ResultEnvelope> + Send + Sync>;

/// In-memory store with scoped handle accounting.
pub struct RecordingStore {
    reply: Reply,
    calls: Mutex<Vec<(String, Value)>>,
    outstanding: AtomicUsize,
    acquired: AtomicUsize,
    released: AtomicUsize,
}

/// Held for the duration of one call; gives the handle back on drop.
struct Handle<'a>(&'a RecordingStore);

impl<'a> Handle<'a> {
    fn acquire(store: &'a RecordingStore) -> Self {
        store.outstanding.fetch_add(1, Ordering::SeqCst);
        store.acquired.fetch_add(1, Ordering::SeqCst);
        Handle(store)
    }
}

impl Drop for Handle<'_> {
    fn drop(&mut self) {
        self.0.outstanding.fetch_sub(1, Ordering::SeqCst);
        self.0.released.fetch_add(1, Ordering::SeqCst);
    }
}

impl RecordingStore {
    pub fn new<F>(reply: F) -> Arc<Self>
    where
        F: Fn(&str, &Value) -> Result<ResultEnvelope> + Send + Sync + 'static,
    {
        Arc::new(Self {
            reply: Box::new(reply),
            calls: Mutex::new(Vec::new()),
            outstanding: AtomicUsize::new(0),
            acquired: AtomicUsize::new(0),
            released: AtomicUsize::new(0),
        })
    }

    /// Store that answers every call with `code` and `data`.
    pub fn replying(code: i32, data: Value) -> Arc<Self> {
        Self::new(move |_, _| Ok(ResultEnvelope::success(code, data.clone())))
    }

    /// Store that reports an application failure for every call.
    pub fn failing(code: i32, message: &'static str) -> Arc<Self> {
        Self::new(move |_, _| Ok(ResultEnvelope::failure(code, message)))
    }

    /// Store whose round trip never completes.
    pub fn broken(detail: &'static str) -> Arc<Self> {
        Self::new(move |_, _| Err(AppError::Transport(detail.to_string())))
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> (String, Value) {
        self.calls().pop().expect("store was never called")
    }

    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::SeqCst)
    }

    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProcedureStore for RecordingStore {
    async fn call(&self, procedure: &str, args: &Value) -> Result<ResultEnvelope> {
        let _handle = Handle::acquire(self);
        self.calls
            .lock()
            .unwrap()
            .push((procedure.to_string(), args.clone()));

        // The database round trip is the one suspension point
        tokio::task::yield_now().await;

        (self.reply)(procedure, args)
    }
}

pub fn test_app(gateway: Gateway, store: Arc<RecordingStore>) -> Router {
    let state = AppState::new(Invoker::new(store));
    create_router(gateway, state, &[])
}

/// Send one request and return its status and JSON body (`null` when empty).
pub async fn send(app: Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let (status, _, body) = send_raw(app, method, uri, body).await;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into()))
    };
    (status, json)
}

pub async fn send_raw(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, bytes.to_vec())
}
