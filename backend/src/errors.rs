use crate::messages::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type LobbyResult<T> = Result<T, LobbyError>;

#[derive(Debug, Error)]
pub enum LobbyError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Forbidden(&'static str),
    #[error("{0}")]
    Conflict(&'static str),
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("{0}")]
    Internal(&'static str),
}

impl LobbyError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LobbyError {
    fn into_response(self) -> Response {
        (self.as_status_code(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
