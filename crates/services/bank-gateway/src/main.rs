//! # Bank Gateway
//!
//! Thin entry point for the ledger (customers, accounts, transactions) gateway.
//! Everything else lives in lib-web.

use lib_web::{start_server, Gateway};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    start_server(Gateway::Bank).await
}
