//! # Middleware
//!
//! Axum middleware applied to every gateway route.
//!
//! ## Modules
//!
//! - **[`mw_req_stamp`]**: Request ID and timestamp stamping
//! - **[`mw_logging`]**: Request/response logging

// region: --- Modules
pub mod mw_req_stamp;
pub mod mw_logging;
// endregion: --- Modules

// region: --- Re-exports
pub use mw_req_stamp::{stamp_req, RequestStamp, REQUEST_ID_HEADER};
pub use mw_logging::log_requests;
// endregion: --- Re-exports
