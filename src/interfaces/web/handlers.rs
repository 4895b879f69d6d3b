use super::error_response::ErrorResponse;
use super::models::{DeliveryReport, MessageResponse, SendImageRequest};
use crate::application::use_cases::{SendCardError, SendCardUseCase, SendTestCardUseCase};
use crate::domain::delivery::DeliveryError;
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use std::sync::Arc;
use tracing::{info, warn};

/// ハンドラ間で共有する状態（起動後は変更しない）
#[derive(Clone)]
pub struct AppState {
    pub send_card: SendCardUseCase,
    pub send_test_card: SendTestCardUseCase,
}

impl AppState {
    pub fn new(send_card: SendCardUseCase) -> Self {
        Self {
            send_test_card: SendTestCardUseCase::new(send_card.clone()),
            send_card,
        }
    }
}

/// Liveness probe
pub async fn health() -> &'static str {
    "OK"
}

/// Send the built-in sample card to the webhook
pub async fn send_test_card(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DeliveryReport>, ErrorResponse> {
    match state.send_test_card.execute().await {
        Ok(status) => Ok(Json(DeliveryReport {
            message: "Test succeeded, the card was delivered to the webhook".to_string(),
            status_code: status.code(),
        })),
        Err(SendCardError::Delivery(DeliveryError::Rejected { status })) => Err(
            ErrorResponse::delivery_failed("Failed to deliver the test card", status),
        ),
        Err(e) => Err(ErrorResponse::internal(
            "An error occurred while sending the test card",
            &e,
        )),
    }
}

/// Render the submitted text and send it to the webhook
pub async fn send_image(
    State(state): State<Arc<AppState>>,
    request: Result<Json<SendImageRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ErrorResponse> {
    let text = match request {
        Ok(Json(SendImageRequest { text: Some(text) })) => text,
        Ok(_) => {
            return Err(ErrorResponse::bad_request(
                "Please provide a valid text field",
            ));
        }
        Err(e) => {
            warn!("JSON parsing error: {:?}", e);
            return Err(ErrorResponse::bad_request(
                "Please provide a valid text field",
            ));
        }
    };

    if text.trim().is_empty() {
        return Err(ErrorResponse::bad_request("Text must not be empty"));
    }

    info!("Received card request ({} chars)", text.chars().count());

    match state.send_card.execute(&text).await {
        Ok(_) => Ok(Json(MessageResponse {
            message: "The card was delivered to the webhook".to_string(),
        })),
        Err(SendCardError::Card(e)) if e.is_client_error() => {
            Err(ErrorResponse::bad_request("Text must not be empty"))
        }
        Err(SendCardError::Delivery(DeliveryError::Rejected { status })) => {
            Err(ErrorResponse::delivery_failed(
                format!("Delivery failed, webhook returned status {status}"),
                status,
            ))
        }
        Err(e) => Err(ErrorResponse::internal(
            "An error occurred while processing the request",
            &e,
        )),
    }
}
