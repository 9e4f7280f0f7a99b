//! # Argument Bundles
//!
//! Typed request-side structures, one per route shape, plus the coercion rules
//! used to build them.

pub mod bank;
pub mod coerce;
pub mod tasks;

pub use bank::*;
pub use tasks::*;
