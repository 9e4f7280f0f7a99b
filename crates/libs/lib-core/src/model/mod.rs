//! # Model Layer
//!
//! - **[`store`]**: the connection provider behind every invocation
//! - **[`rpc`]**: result envelope, invoker, and the [`rpc::Operation`] contract
//! - **[`ops`]**: the closed set of operations for each gateway instance

pub mod ops;
pub mod rpc;
pub mod store;
