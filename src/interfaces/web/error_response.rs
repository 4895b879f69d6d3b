use crate::debug::debug_helpers::log_error_details;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// API のエラー応答
///
/// `status_code` は Webhook プロバイダの応答コード、`details` は内部エラーの内容。
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            status_code: None,
            details: None,
        }
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    /// Webhook がアップロードを受け付けなかった
    pub fn delivery_failed(error: impl Into<String>, provider_status: u16) -> Self {
        Self {
            status_code: Some(provider_status),
            ..Self::new(StatusCode::INTERNAL_SERVER_ERROR, error)
        }
    }

    pub fn internal(error: impl Into<String>, cause: &dyn std::error::Error) -> Self {
        let error = error.into();
        log_error_details(cause, &error);
        Self {
            details: Some(cause.to_string()),
            ..Self::new(StatusCode::INTERNAL_SERVER_ERROR, error)
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_body() {
        let body = serde_json::to_value(ErrorResponse::bad_request("Text must not be empty")).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Text must not be empty" }));
    }

    #[test]
    fn test_delivery_failed_body() {
        let response = ErrorResponse::delivery_failed("Delivery failed", 429);
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "error": "Delivery failed", "status_code": 429 })
        );
    }

    #[test]
    fn test_internal_body_carries_details() {
        let cause = std::io::Error::other("socket closed");
        let body = serde_json::to_value(ErrorResponse::internal("Request failed", &cause)).unwrap();
        assert_eq!(body["details"], "socket closed");
        assert!(body.get("status_code").is_none());
    }
}
