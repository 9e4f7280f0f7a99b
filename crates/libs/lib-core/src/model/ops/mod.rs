//! # Gateway Operations
//!
//! One closed enum per gateway instance, one variant per route. Each variant
//! carries the already-extracted argument bundle for that route.

pub mod bank;
pub mod tasks;

pub use bank::BankOperation;
pub use tasks::TaskOperation;
