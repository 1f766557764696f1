use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = core::result::Result<T, ApiError>;

/// Coarse classification of every rejection the service can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidFormat,
    QuotaExceeded,
    Conflict,
    InvalidBody,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("User not found")]
    UserNotFound,
    #[error("ID is not a valid UUID ")]
    InvalidTodoId,
    #[error("This ToDo doesnt belong to User")]
    TodoNotOwned,
    #[error("Todo not found")]
    TodoNotFound,
    #[error("User doesn't have pro plan or have more than 10 ToDos")]
    QuotaExceeded,
    #[error("Username already exists")]
    UsernameTaken,
    #[error("Pro plan is already activated.")]
    AlreadyPro,
    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::UserNotFound | ApiError::TodoNotOwned | ApiError::TodoNotFound => {
                ErrorKind::NotFound
            }
            ApiError::InvalidTodoId => ErrorKind::InvalidFormat,
            ApiError::QuotaExceeded => ErrorKind::QuotaExceeded,
            ApiError::UsernameTaken | ApiError::AlreadyPro => ErrorKind::Conflict,
            ApiError::InvalidBody { .. } => ErrorKind::InvalidBody,
        }
    }

    // Conflicts answer 400 rather than 409; existing clients rely on it.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody { status, .. } => *status,
            _ => match self.kind() {
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::QuotaExceeded => StatusCode::FORBIDDEN,
                ErrorKind::InvalidFormat | ErrorKind::Conflict | ErrorKind::InvalidBody => {
                    StatusCode::BAD_REQUEST
                }
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_response = json!({ "error": self.to_string() });
        (self.status_code(), Json(error_response)).into_response()
    }
}
