use actix_web::{
    error::{JsonPayloadError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use thiserror::Error;

use crate::protocol::ErrorResponse;

pub const MSG_FIELDS_REQUIRED: &str = "Tous les champs sont requis";
pub const MSG_LOGIN_FIELDS_REQUIRED: &str = "Email et mot de passe requis";
pub const MSG_INVALID_BODY: &str = "Corps de requête JSON invalide";
pub const MSG_INVALID_QUERY: &str = "Paramètres de requête invalides";
pub const MSG_DOCTOR_NOT_FOUND: &str = "Médecin non trouvé";
pub const MSG_ROUTE_NOT_FOUND: &str = "Route non trouvée";
pub const MSG_EMAIL_TAKEN: &str = "Cet email est déjà utilisé";
pub const MSG_BAD_CREDENTIALS: &str = "Email ou mot de passe incorrect";
pub const MSG_INTERNAL: &str = "Erreur interne du serveur";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    /// Duplicate email. Answered with 400 rather than 409 for client compatibility.
    #[error("{0}")]
    Conflict(&'static str),
    #[error("{0}")]
    Auth(&'static str),
    #[error("internal error: {0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn is_internal(&self) -> bool {
        matches!(self, ApiError::Internal(_))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // internal details stay in the logs
        let body = match self {
            ApiError::Internal(_) => ErrorResponse::new(MSG_INTERNAL),
            err => ErrorResponse::new(err),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Turns body extraction failures into the usual `{error}` payload.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "rejected request body");
    ApiError::Validation(MSG_INVALID_BODY).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "rejected query string");
    ApiError::Validation(MSG_INVALID_QUERY).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_is_bad_request() {
        let err = ApiError::Conflict(MSG_EMAIL_TAKEN);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), MSG_EMAIL_TAKEN);
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            ApiError::Validation(MSG_FIELDS_REQUIRED).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound(MSG_DOCTOR_NOT_FOUND).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Auth(MSG_BAD_CREDENTIALS).status_code(),
            StatusCode::UNAUTHORIZED
        );
        let internal = ApiError::Internal("poisoned".to_string());
        assert!(internal.is_internal());
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
