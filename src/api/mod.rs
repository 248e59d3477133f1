//! HTTP surface of the always-on mode: liveness and health endpoints.

pub mod handlers;
pub mod middleware;
pub mod routes;
