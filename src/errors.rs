use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid players: {0}")]
    InvalidPlayers(String),

    #[error("Unknown match: {0}")]
    UnknownMatch(uuid::Uuid),

    #[error("Invalid side: {0}")]
    InvalidSide(String),

    #[error("Match is already completed")]
    AlreadyCompleted,

    #[error("Completed matches cannot be reset")]
    NotResettable,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Storage failure: {0}")]
    StorageFailure(String),

    #[error("Internal server error")]
    InternalError,
}

impl AppError {
    pub fn to_response(&self) -> (StatusCode, String) {
        match self {
            AppError::InvalidPlayers(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::UnknownMatch(uuid) => (
                StatusCode::NOT_FOUND,
                format!("Match {} not found", uuid),
            ),
            AppError::InvalidSide(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::AlreadyCompleted => (StatusCode::CONFLICT, self.to_string()),
            AppError::NotResettable => (StatusCode::CONFLICT, self.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::StorageFailure(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::InternalError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unexpected server error".into(),
            ),
        }
    }
}
