use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Recurso não encontrado".into()),
                RepositoryError::UniqueViolation(msg) => HttpError::BadRequest(msg),
                // Store failures reaching this point were rolled back at the
                // transaction boundary and answer as a client-visible 400; a
                // failed commit is mapped to `Internal` by the service itself.
                err @ RepositoryError::Sqlx(_) => HttpError::BadRequest(err.to_string()),
            },

            ServiceError::Validation(errors) => HttpError::BadRequest(errors.join("; ")),

            ServiceError::EmptyCart => HttpError::BadRequest(ServiceError::EmptyCart.to_string()),

            ServiceError::ProductUnavailable(msg)
            | ServiceError::InsufficientStock(msg)
            | ServiceError::InvalidCoupon(msg)
            | ServiceError::AlreadyExists(msg) => HttpError::BadRequest(msg),

            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::Forbidden(msg) => HttpError::Forbidden(msg),

            ServiceError::Jwt(err) => HttpError::Unauthorized(format!("JWT error: {err}")),
            ServiceError::TokenExpired => HttpError::Unauthorized("Token expirado".into()),
            ServiceError::InvalidTokenType => HttpError::Unauthorized("Token inválido.".into()),

            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { error: msg });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ServiceError) -> StatusCode {
        HttpError::from(err).into_response().status()
    }

    #[test]
    fn checkout_failures_map_to_bad_request() {
        assert_eq!(status_of(ServiceError::EmptyCart), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(ServiceError::ProductUnavailable(
                "Produto não encontrado: id 9".into()
            )),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ServiceError::InsufficientStock(
                "Estoque insuficiente para Café".into()
            )),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ServiceError::InvalidCoupon("Cupom expirado.".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn rolled_back_store_failure_maps_to_bad_request() {
        let err = ServiceError::Repo(RepositoryError::Sqlx(sqlx::Error::PoolClosed));
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn commit_failure_maps_to_internal_error() {
        let err = ServiceError::Internal("Erro interno do servidor".into());
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn lookup_and_auth_failures_keep_their_status() {
        assert_eq!(
            status_of(ServiceError::NotFound("Pedido não encontrado".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_of(ServiceError::TokenExpired), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_of(ServiceError::Forbidden("Apenas administradores".into())),
            StatusCode::FORBIDDEN
        );
    }
}
