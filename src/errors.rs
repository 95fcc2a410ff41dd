use axum::http::StatusCode;
use chrono::NaiveDate;
use thiserror::Error;

/// Contract violations a caller of the grouping API can commit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroupingError {
    #[error("days must be strictly ascending: {next} follows {previous}")]
    Unsorted { previous: NaiveDate, next: NaiveDate },
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
