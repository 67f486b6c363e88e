use crate::api::models::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing Location or ReviewBody")]
    MissingField,

    #[error("invalid location")]
    InvalidLocation,

    #[error("invalid {param} '{value}': expected YYYY-MM-DD")]
    MalformedDate { param: &'static str, value: String },

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Not Found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingField
            | AppError::InvalidLocation
            | AppError::MalformedDate { .. } => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::Internal(msg) = &self {
            error!("Internal error: {}", msg);
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
