//! HTTP error response conversion
//!
//! Handlers return `Result<_, HttpAppError>`; every failure renders as
//! `{"success": false, "error": <client message>}` with the status from
//! [`ErrorMetadata`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use vcfgw_core::{AppError, ErrorMetadata, LogLevel};

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Wrapper type for AppError to implement IntoResponse
/// (orphan rule: IntoResponse and AppError both live in other crates)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::from(err))
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Request rejected");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Request rejected");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        (status, Json(ErrorResponse::new(app_error.client_message()))).into_response()
    }
}
