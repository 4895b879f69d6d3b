use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Webhook rejected the upload with status {status}")]
    Rejected { status: u16 },

    #[error("Webhook transport failed: {0}")]
    Transport(String),

    #[error("Webhook URL is not configured")]
    NotConfigured,

    #[error("Invalid webhook URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl DeliveryError {
    /// プロバイダが返したステータスコード（応答があった場合のみ）
    pub fn provider_status(&self) -> Option<u16> {
        match self {
            DeliveryError::Rejected { status } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_status() {
        assert_eq!(DeliveryError::Rejected { status: 429 }.provider_status(), Some(429));
        assert_eq!(
            DeliveryError::Transport("connection reset".to_string()).provider_status(),
            None
        );
        assert_eq!(DeliveryError::NotConfigured.provider_status(), None);
    }

    #[test]
    fn test_rejected_message_embeds_status() {
        let error = DeliveryError::Rejected { status: 400 };
        assert!(error.to_string().contains("400"));
    }
}
