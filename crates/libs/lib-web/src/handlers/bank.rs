//! # Ledger Handlers
//!
//! One handler per `bank.*` procedure. Each builds a [`BankOperation`] from the
//! request and hands it to [`dispatch`].
//!
//! ## Endpoints
//!
//! - `GET  /customers/` - `bank.get_all_customers`
//! - `GET  /customers/{id}` - `bank.get_customer`
//! - `POST /customers/` - `bank.create_customer` (201)
//! - `GET  /customers/{id}/accounts` - `bank.get_customer_accounts`
//! - `GET  /accounts/{account_number}` - `bank.get_account_by_number`
//! - `POST /accounts/` - `bank.create_account` (201)
//! - `POST /transactions/deposit` - `bank.deposit`
//! - `POST /transactions/withdraw` - `bank.withdraw`
//! - `POST /transactions/transfer` - `bank.transfer`
//! - `GET  /accounts/{account_number}/transactions` - `bank.get_account_transactions`
//!
//! ## Request Examples
//!
//! ```bash
//! curl http://localhost:8000/customers/42
//!
//! curl -X POST http://localhost:8000/accounts/ \
//!      -H 'content-type: application/json' \
//!      -d '{"customer_id": 42, "account_type": "savings"}'
//!
//! curl -X POST http://localhost:8000/transactions/withdraw \
//!      -H 'content-type: application/json' \
//!      -d '{"account_number": "ACC123", "amount": "25.00", "description": "ATM"}'
//! ```

use crate::dispatch::dispatch;
use crate::extract::JsonBody;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use lib_core::dto::{AccountNumberArgs, CreateAccountArgs, IdArgs, MovementArgs, TransferArgs};
use lib_core::{BankOperation, Invoker, Result};
use serde_json::Value;
use tracing::instrument;

type Reply = Result<(StatusCode, Json<Value>)>;

#[instrument(skip_all)]
pub async fn get_all_customers(State(invoker): State<Invoker>) -> Reply {
    dispatch(&invoker, BankOperation::GetAllCustomers).await
}

#[instrument(skip_all, fields(id = %id))]
pub async fn get_customer(State(invoker): State<Invoker>, Path(id): Path<String>) -> Reply {
    dispatch(&invoker, BankOperation::GetCustomer(IdArgs::from_path(&id))).await
}

#[instrument(skip_all)]
pub async fn create_customer(State(invoker): State<Invoker>, JsonBody(body): JsonBody) -> Reply {
    dispatch(&invoker, BankOperation::CreateCustomer(body)).await
}

#[instrument(skip_all, fields(id = %id))]
pub async fn get_customer_accounts(
    State(invoker): State<Invoker>,
    Path(id): Path<String>,
) -> Reply {
    dispatch(&invoker, BankOperation::GetCustomerAccounts(IdArgs::from_path(&id))).await
}

#[instrument(skip_all, fields(account_number = %account_number))]
pub async fn get_account_by_number(
    State(invoker): State<Invoker>,
    Path(account_number): Path<String>,
) -> Reply {
    let args = AccountNumberArgs::from_path(&account_number);
    dispatch(&invoker, BankOperation::GetAccountByNumber(args)).await
}

#[instrument(skip_all)]
pub async fn create_account(State(invoker): State<Invoker>, JsonBody(body): JsonBody) -> Reply {
    dispatch(&invoker, BankOperation::CreateAccount(CreateAccountArgs::from_body(&body))).await
}

#[instrument(skip_all)]
pub async fn deposit(State(invoker): State<Invoker>, JsonBody(body): JsonBody) -> Reply {
    dispatch(&invoker, BankOperation::Deposit(MovementArgs::from_body(&body))).await
}

#[instrument(skip_all)]
pub async fn withdraw(State(invoker): State<Invoker>, JsonBody(body): JsonBody) -> Reply {
    dispatch(&invoker, BankOperation::Withdraw(MovementArgs::from_body(&body))).await
}

#[instrument(skip_all)]
pub async fn transfer(State(invoker): State<Invoker>, JsonBody(body): JsonBody) -> Reply {
    dispatch(&invoker, BankOperation::Transfer(TransferArgs::from_body(&body))).await
}

#[instrument(skip_all, fields(account_number = %account_number))]
pub async fn get_account_transactions(
    State(invoker): State<Invoker>,
    Path(account_number): Path<String>,
) -> Reply {
    let args = AccountNumberArgs::from_path(&account_number);
    dispatch(&invoker, BankOperation::GetAccountTransactions(args)).await
}
