//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - One transaction per request, opened by the handler and lent to repos
//! - Relationship reads use JOINs - no N+1 queries
//! - Rely on DB constraints, handle violations - no check-then-insert

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_memory_pool, create_pool};
pub use sqlx::SqlitePool;
pub use repos::*;
