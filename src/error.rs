use axum::http::header::RETRY_AFTER;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::contact::model::SubmissionResult;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    RateLimited(u64),
    MailFailed(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::RateLimited(secs) => write!(f, "Rate Limited: retry after {secs}s"),
            AppError::MailFailed(msg) => write!(f, "Mail Failed: {msg}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(SubmissionResult::failed(msg))).into_response()
            }
            AppError::RateLimited(secs) => (
                StatusCode::TOO_MANY_REQUESTS,
                [(RETRY_AFTER, secs.to_string())],
                Json(SubmissionResult::failed(
                    "Too many requests. Please try again later.",
                )),
            )
                .into_response(),
            // The cause stays in the logs; callers only ever see the generic message.
            AppError::MailFailed(cause) => {
                tracing::error!("Failed to send email: {cause}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(SubmissionResult::failed("Failed to send message")),
                )
                    .into_response()
            }
        }
    }
}

impl From<crate::email::MailError> for AppError {
    fn from(err: crate::email::MailError) -> Self {
        AppError::MailFailed(err.to_string())
    }
}
