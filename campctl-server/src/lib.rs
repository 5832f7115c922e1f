//! campctl-server: HTTP service for campers, activities and signups
//!
//! Layers, leaves first:
//! - `models`: validated domain input
//! - `db`: SQLite pool, schema and repositories
//! - `http`: axum routes, extractors, views and error mapping

pub mod db;
pub mod http;
pub mod models;

pub use db::DbError;
pub use http::{build_router, run_server, ApiError, ServerConfig};
