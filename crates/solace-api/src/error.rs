use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use solace_core::image::ImageError;
use solace_core::validation::FieldErrors;
use solace_inquiries::error::InquiryClientError;
use solace_storage::error::StorageError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// Body could not be read as the expected JSON shape.
    InvalidBody { status: StatusCode, message: String },
    Validation(FieldErrors),
    PayloadTooLarge(String),
    Conflict(String),
    MethodNotAllowed(String),
    BadGateway(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<FieldErrors>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, fields) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::InvalidBody { status, message } => (status, message, None),
            ApiError::Validation(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation failed".to_string(),
                Some(fields),
            ),
            ApiError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg, None),
            ApiError::MethodNotAllowed(msg) => (StatusCode::METHOD_NOT_ALLOWED, msg, None),
            ApiError::BadGateway(msg) => {
                tracing::error!("upstream error: {msg}");
                (StatusCode::BAD_GATEWAY, "enquiry service unavailable".to_string(), None)
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    None,
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                error: message,
                fields,
            }),
        )
            .into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::RecordNotFound { .. } => ApiError::NotFound(e.to_string()),
            StorageError::Validation(fields) => ApiError::Validation(fields),
            StorageError::Conflict { .. } | StorageError::PreconditionFailed { .. } => {
                ApiError::Conflict(e.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::InvalidBody {
            status: e.status(),
            message: e.body_text(),
        }
    }
}

impl From<InquiryClientError> for ApiError {
    fn from(e: InquiryClientError) -> Self {
        match e {
            InquiryClientError::NotFound(id) => ApiError::NotFound(format!("enquiry {id} not found")),
            other => ApiError::BadGateway(other.to_string()),
        }
    }
}

impl From<ImageError> for ApiError {
    fn from(e: ImageError) -> Self {
        match e {
            ImageError::TooLarge { .. } => ApiError::PayloadTooLarge(e.to_string()),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl From<solace_export::error::ExportError> for ApiError {
    fn from(e: solace_export::error::ExportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
