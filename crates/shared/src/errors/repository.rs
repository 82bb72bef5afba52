use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    UniqueViolation(String),
}

impl RepositoryError {
    /// Translates a raw sqlx failure, turning a unique-constraint hit into
    /// the caller-supplied conflict message.
    pub fn from_sqlx(err: SqlxError, conflict_msg: &str) -> Self {
        match &err {
            SqlxError::RowNotFound => RepositoryError::NotFound,
            SqlxError::Database(db)
                if db.kind() == sqlx::error::ErrorKind::UniqueViolation =>
            {
                RepositoryError::UniqueViolation(conflict_msg.to_string())
            }
            _ => RepositoryError::Sqlx(err),
        }
    }
}
