//! HTTP response mapping for [`AppError`]
//!
//! Compiled with the `axum` feature. Errors render as an RFC 7807
//! problem document so every service in the workspace reports failures
//! in the same shape.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::app_error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details, with `action` as an extension member
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_follows_kind() {
        let res = AppError::unauthorized("Authentication required").into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let res = AppError::conflict("Email is already registered").into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_problem_documents_are_json() {
        let res = AppError::bad_request("Invalid email format").into_response();
        let content_type = res
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("application/json"));
    }
}
