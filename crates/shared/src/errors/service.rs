use crate::errors::repository::RepositoryError;
use jsonwebtoken::errors::Error as JwtError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Pedido deve conter pelo menos um item")]
    EmptyCart,

    // Checkout-time product failures carry the exact client-facing message.
    #[error("{0}")]
    ProductUnavailable(String),

    #[error("{0}")]
    InsufficientStock(String),

    #[error("{0}")]
    InvalidCoupon(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("JWT error: {0}")]
    Jwt(#[from] JwtError),

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid Token")]
    InvalidTokenType,

    #[error("Internal error: {0}")]
    Internal(String),
}
