//! Repository functions
//!
//! Free functions over `&SqlitePool`, one module per table. All SQL lives
//! here; services and handlers never touch the pool directly.

pub mod cafe;
pub mod menu_item;
pub mod order;
pub mod table;

use shared::error::AppError;

/// Repository-level error
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("record not found")]
    NotFound,

    #[error("unique constraint violated: {0}")]
    Duplicate(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;

impl RepoError {
    /// True when the underlying sqlx error is a UNIQUE constraint violation
    pub fn is_unique_violation(err: &sqlx::Error) -> bool {
        matches!(err, sqlx::Error::Database(db) if db.message().contains("UNIQUE constraint failed"))
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::not_found("Record not found"),
            RepoError::Duplicate(what) => AppError::conflict(format!("{what} already exists")),
            RepoError::Database(e) => AppError::database(e.to_string()),
        }
    }
}

/// Map sqlx errors, promoting UNIQUE violations to [`RepoError::Duplicate`]
pub(crate) fn insert_err(err: sqlx::Error, what: &str) -> RepoError {
    if RepoError::is_unique_violation(&err) {
        RepoError::Duplicate(what.to_string())
    } else {
        RepoError::Database(err)
    }
}
