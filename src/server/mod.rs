//! HTTP boundary — axum REST routes over the core.

pub mod routes;

pub use routes::{api_routes, AppState};
