use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SendImageRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `/test` の成功応答
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryReport {
    pub message: String,
    pub status_code: u16,
}
