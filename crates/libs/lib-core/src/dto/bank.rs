//! # Ledger Argument Bundles
//!
//! Typed bundles for the `bank.*` procedures. Each one is built by a pure
//! function of the request (path segment or JSON body) and serialized as the
//! `args` of `api.call`.
//!
//! | Bundle | Built from | Wire shape |
//! |---|---|---|
//! | [`IdArgs`] | path `{id}` | `{"id": int}` |
//! | [`AccountNumberArgs`] | path `{account_number}` | `{"account_number": string}` |
//! | [`CreateAccountArgs`] | body | `{"customer_id", "account_type", "initial_balance"}` |
//! | [`MovementArgs`] | body | `{"account_number", "amount", "description"}` |
//! | [`TransferArgs`] | body | `{"from_account_number", "to_account_number", "amount", ...}` |
//!
//! `customer_id` is an integer and every `amount` or balance a float, `null`
//! when the client value is not a number.

use super::coerce::{is_truthy, parse_float, parse_int, parse_int_str};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Account type used when the client does not pick one.
pub const DEFAULT_ACCOUNT_TYPE: &str = "checking";

/// Opening balance used when the client does not give one.
pub const DEFAULT_INITIAL_BALANCE: f64 = 0.00;

/// `{ "id": int }` for lookups by numeric identifier.
///
/// Also used by the task instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdArgs {
    /// `None` when the path segment is not a number; sent as `null`
    pub id: Option<i64>,
}

impl IdArgs {
    pub fn from_path(segment: &str) -> Self {
        Self {
            id: parse_int_str(segment),
        }
    }
}

/// `{ "account_number": string }`, copied from the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountNumberArgs {
    pub account_number: String,
}

impl AccountNumberArgs {
    pub fn from_path(segment: &str) -> Self {
        Self {
            account_number: segment.to_string(),
        }
    }
}

/// Bundle for `bank.create_account`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAccountArgs {
    pub customer_id: Option<i64>,
    /// Client value as sent (usually a string), or [`DEFAULT_ACCOUNT_TYPE`]
    pub account_type: Value,
    pub initial_balance: Option<f64>,
}

impl CreateAccountArgs {
    /// Build from the request body.
    ///
    /// - `customer_id`: integer coercion, `null` when absent or not a number
    /// - `account_type`: [`DEFAULT_ACCOUNT_TYPE`] when absent, `null`, or empty;
    ///   any other value is forwarded as is, without string conversion
    /// - `initial_balance`: [`DEFAULT_INITIAL_BALANCE`] when absent, `null`, `0`,
    ///   or empty; float coercion otherwise
    pub fn from_body(body: &Value) -> Self {
        let account_type = body
            .get("account_type")
            .filter(|v| is_truthy(v))
            .cloned()
            .unwrap_or_else(|| Value::from(DEFAULT_ACCOUNT_TYPE));

        let initial_balance = match body.get("initial_balance").filter(|v| is_truthy(v)) {
            Some(value) => parse_float(value),
            None => Some(DEFAULT_INITIAL_BALANCE),
        };

        Self {
            customer_id: body.get("customer_id").and_then(parse_int),
            account_type,
            initial_balance,
        }
    }
}

/// Bundle for `bank.deposit` and `bank.withdraw`.
///
/// Text fields are copied verbatim and left out entirely when the client
/// omits them; `amount` is always present (`null` when not a number).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<Value>,
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
}

impl MovementArgs {
    pub fn from_body(body: &Value) -> Self {
        Self {
            account_number: body.get("account_number").cloned(),
            amount: body.get("amount").and_then(parse_float),
            description: body.get("description").cloned(),
        }
    }
}

/// Bundle for `bank.transfer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_account_number: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_account_number: Option<Value>,
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
}

impl TransferArgs {
    pub fn from_body(body: &Value) -> Self {
        Self {
            from_account_number: body.get("from_account_number").cloned(),
            to_account_number: body.get("to_account_number").cloned(),
            amount: body.get("amount").and_then(parse_float),
            description: body.get("description").cloned(),
        }
    }
}

// endregion: --- Tests
