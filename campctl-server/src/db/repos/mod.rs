//! Repository implementations for database access
//!
//! Repositories borrow a connection rather than the pool, so a handler opens
//! one transaction and hands it to every repository it needs.
//! - Relationship traversal is an explicit JOIN query, never lazy loading
//! - Rely on DB constraints and map violations, no check-then-insert

pub mod activities;
pub mod campers;
pub mod signups;

pub use activities::{Activity, ActivityRepo};
pub use campers::{Camper, CamperRepo};
pub use signups::{Signup, SignupRepo, SignupWithActivity};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("foreign key violation")]
    ForeignKey,

    #[error("check constraint violation")]
    Check,

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i64 },
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        let (foreign_key, check) = e
            .as_database_error()
            .map(|db| (db.is_foreign_key_violation(), db.is_check_violation()))
            .unwrap_or_default();

        if foreign_key {
            Self::ForeignKey
        } else if check {
            Self::Check
        } else {
            Self::Sqlx(e)
        }
    }
}
