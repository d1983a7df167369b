//! Maps domain errors to HTTP responses.
//!
//! [`ApiError`] wraps [`AppError`] at the HTTP boundary (a local type is
//! needed to implement `IntoResponse`); `?` converts transparently. The
//! interactive-flow surfaces mandated by the application contract live
//! here: missing authentication redirects to the login route, a role denial
//! redirects home with a one-shot flash cookie, and an ownership denial is a
//! plain 403 naming the record kind.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};

use stamboek_core::error::{AppError, ErrorKind};

use crate::flash;

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// [`AppError`] at the HTTP boundary.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;

        let (status, error_code) = match &err.kind {
            ErrorKind::Authentication => {
                // Interactive flow: send the browser to the login route.
                return Redirect::to("/login").into_response();
            }
            ErrorKind::RoleDenied => {
                // Redirect home with the one-shot denial flash.
                let mut response = Redirect::to("/").into_response();
                if let Ok(value) =
                    header::HeaderValue::from_str(&flash::denial_cookie(&err.message).to_string())
                {
                    response.headers_mut().append(header::SET_COOKIE, value);
                }
                return response;
            }
            ErrorKind::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::OAuthExchange => (StatusCode::BAD_REQUEST, "OAUTH_EXCHANGE"),
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
            _ => {
                tracing::error!(error = %err.message, kind = %err.kind, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message: err.message.clone(),
        };

        (status, Json(body)).into_response()
    }
}
