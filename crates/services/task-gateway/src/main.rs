//! # Task Gateway
//!
//! Thin entry point for the task manager (tasks, categories) gateway.
//! Everything else lives in lib-web.

use lib_web::{start_server, Gateway};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    start_server(Gateway::Task).await
}
