//! # Ledger Operations
//!
//! The `bank.*` procedures exposed by the ledger gateway.

use crate::dto::{AccountNumberArgs, CreateAccountArgs, IdArgs, MovementArgs, TransferArgs};
use crate::error::Result;
use crate::model::rpc::Operation;
use axum::http::StatusCode;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum BankOperation {
    GetAllCustomers,
    GetCustomer(IdArgs),
    /// Request body forwarded verbatim
    CreateCustomer(Value),
    GetCustomerAccounts(IdArgs),
    GetAccountByNumber(AccountNumberArgs),
    CreateAccount(CreateAccountArgs),
    Deposit(MovementArgs),
    Withdraw(MovementArgs),
    Transfer(TransferArgs),
    GetAccountTransactions(AccountNumberArgs),
}

impl Operation for BankOperation {
    fn procedure(&self) -> &'static str {
        match self {
            Self::GetAllCustomers => "bank.get_all_customers",
            Self::GetCustomer(_) => "bank.get_customer",
            Self::CreateCustomer(_) => "bank.create_customer",
            Self::GetCustomerAccounts(_) => "bank.get_customer_accounts",
            Self::GetAccountByNumber(_) => "bank.get_account_by_number",
            Self::CreateAccount(_) => "bank.create_account",
            Self::Deposit(_) => "bank.deposit",
            Self::Withdraw(_) => "bank.withdraw",
            Self::Transfer(_) => "bank.transfer",
            Self::GetAccountTransactions(_) => "bank.get_account_transactions",
        }
    }

    fn success_status(&self) -> StatusCode {
        match self {
            Self::CreateCustomer(_) | Self::CreateAccount(_) => StatusCode::CREATED,
            Self::GetAllCustomers
            | Self::GetCustomer(_)
            | Self::GetCustomerAccounts(_)
            | Self::GetAccountByNumber(_)
            | Self::Deposit(_)
            | Self::Withdraw(_)
            | Self::Transfer(_)
            | Self::GetAccountTransactions(_) => StatusCode::OK,
        }
    }

    fn into_args(self) -> Result<Option<Value>> {
        let args = match self {
            Self::GetAllCustomers => return Ok(None),
            Self::CreateCustomer(body) => body,
            Self::GetCustomer(args) | Self::GetCustomerAccounts(args) => {
                serde_json::to_value(args)?
            }
            Self::GetAccountByNumber(args) | Self::GetAccountTransactions(args) => {
                serde_json::to_value(args)?
            }
            Self::CreateAccount(args) => serde_json::to_value(args)?,
            Self::Deposit(args) | Self::Withdraw(args) => serde_json::to_value(args)?,
            Self::Transfer(args) => serde_json::to_value(args)?,
        };
        Ok(Some(args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn creates_answer_201_everything_else_200() {
        let create = BankOperation::CreateAccount(CreateAccountArgs::from_body(&json!({})));
        assert_eq!(create.success_status(), StatusCode::CREATED);
        assert_eq!(
            BankOperation::CreateCustomer(json!({})).success_status(),
            StatusCode::CREATED
        );
        assert_eq!(
            BankOperation::Transfer(TransferArgs::from_body(&json!({}))).success_status(),
            StatusCode::OK
        );
    }

    #[test]
    fn no_arg_operation_sends_no_bundle() {
        assert_eq!(BankOperation::GetAllCustomers.into_args().unwrap(), None);
    }

    #[test]
    fn deposit_and_withdraw_share_a_shape_but_not_a_procedure() {
        let body = json!({ "account_number": "ACC1", "amount": 10 });
        let deposit = BankOperation::Deposit(MovementArgs::from_body(&body));
        let withdraw = BankOperation::Withdraw(MovementArgs::from_body(&body));

        assert_eq!(deposit.procedure(), "bank.deposit");
        assert_eq!(withdraw.procedure(), "bank.withdraw");
        assert_eq!(deposit.into_args().unwrap(), withdraw.into_args().unwrap());
    }

    #[test]
    fn customer_body_is_forwarded_verbatim() {
        let body = json!({ "first_name": "Ada", "extra": [1, 2] });
        let args = BankOperation::CreateCustomer(body.clone()).into_args().unwrap();
        assert_eq!(args, Some(body));
    }
}
