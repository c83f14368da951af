//! HTTP layer for the tennis score backend.
//!
//! This module groups the HTTP request handlers and route definitions used to
//! build the Axum router. Handlers are small adapters that parse transport
//! input and call into `crate::service`; routes compose them and expose
//! `create_http_routes(state)`, a ready-to-use `axum::Router` for the
//! application.

pub mod handlers;
pub mod routes;

pub use routes::create_http_routes;
