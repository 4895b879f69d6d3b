use crate::domain::card::RenderedImage;
use crate::domain::delivery::{DeliveryError, DeliveryStatus, WebhookTransport};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

/// A single upload captured by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedUpload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
}

enum MockOutcome {
    Status(u16),
    Failure(String),
}

/// ネットワークを使わない Webhook。固定のステータスを返し、受け取った画像を記録する
pub struct MockTransport {
    outcome: MockOutcome,
    uploads: Mutex<Vec<RecordedUpload>>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::with_status(DeliveryStatus::ACCEPTED.code())
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            outcome: MockOutcome::Status(status),
            uploads: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::Failure(message.into()),
            uploads: Mutex::new(Vec::new()),
        }
    }

    pub async fn uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().await.clone()
    }

    pub async fn upload_count(&self) -> usize {
        self.uploads.lock().await.len()
    }
}

#[async_trait]
impl WebhookTransport for MockTransport {
    async fn upload(&self, image: &RenderedImage) -> Result<DeliveryStatus, DeliveryError> {
        self.uploads.lock().await.push(RecordedUpload {
            bytes: image.bytes().to_vec(),
            file_name: RenderedImage::FILE_NAME.to_string(),
            content_type: RenderedImage::CONTENT_TYPE.to_string(),
        });

        match &self.outcome {
            MockOutcome::Status(status) => {
                debug!("Mock webhook answering {}", status);
                Ok(DeliveryStatus::new(*status))
            }
            MockOutcome::Failure(message) => Err(DeliveryError::Transport(message.clone())),
        }
    }
}
