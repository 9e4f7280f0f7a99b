//! # Web Library
//!
//! HTTP surface of the procedure gateway: routes, handlers, middleware, and the
//! dispatch step that connects a route to the remote procedure invoker.

pub mod dispatch;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

pub use routes::{create_router, Gateway};
pub use server::{start_server, AppState};
