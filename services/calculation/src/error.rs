use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use calc_types::prelude::CalculationError;
use serde_json::json;
use thiserror::Error;

/// Central error type for the Calculation API
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Calculation(#[from] CalculationError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Calculation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Calculation(err) => err.code(),
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let message = match &self {
            AppError::Calculation(err) => err.to_string(),
            AppError::BadRequest(msg) => {
                tracing::warn!(%msg, "rejected malformed request");
                msg.clone()
            }
            AppError::InternalError(err) => {
                // Details stay in the log, never in the body.
                tracing::error!(error = ?err, "internal error");
                "Internal server error".to_string()
            }
        };

        let body = Json(json!({
            "error": code,
            "message": message
        }));

        (status, body).into_response()
    }
}
