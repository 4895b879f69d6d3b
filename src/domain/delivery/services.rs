use super::errors::DeliveryError;
use super::transport::WebhookTransport;
use super::value_objects::DeliveryStatus;
use crate::domain::card::RenderedImage;
use std::sync::Arc;
use tracing::{info, warn};

/// カード画像を Webhook に配信するサービス
pub struct Notifier {
    transport: Arc<dyn WebhookTransport>,
}

impl Notifier {
    pub fn new(transport: Arc<dyn WebhookTransport>) -> Self {
        Self { transport }
    }

    /// 画像をアップロードし、`204` 以外の応答は `Rejected` として返す
    pub async fn deliver(&self, image: &RenderedImage) -> Result<DeliveryStatus, DeliveryError> {
        let status = self.transport.upload(image).await?;

        if status.is_accepted() {
            info!(status = status.code(), bytes = image.len(), "Card delivered");
            Ok(status)
        } else {
            warn!(status = status.code(), "Webhook rejected card");
            Err(DeliveryError::Rejected {
                status: status.code(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::webhook::MockTransport;
    use tracing_test::traced_test;

    fn sample_image() -> RenderedImage {
        RenderedImage::new(vec![1, 2, 3], 1, 1)
    }

    #[tokio::test]
    async fn test_deliver_accepted() {
        let transport = Arc::new(MockTransport::with_status(204));
        let notifier = Notifier::new(transport.clone());

        let status = notifier.deliver(&sample_image()).await.unwrap();
        assert_eq!(status, DeliveryStatus::ACCEPTED);

        let uploads = transport.uploads().await;
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].bytes, vec![1, 2, 3]);
        assert_eq!(uploads[0].file_name, "output.png");
        assert_eq!(uploads[0].content_type, "image/png");
    }

    #[tokio::test]
    #[traced_test]
    async fn test_deliver_rejected_embeds_status() {
        let notifier = Notifier::new(Arc::new(MockTransport::with_status(400)));

        let error = notifier.deliver(&sample_image()).await.unwrap_err();
        assert!(matches!(error, DeliveryError::Rejected { status: 400 }));
        assert!(logs_contain("Webhook rejected card"));
    }

    #[tokio::test]
    async fn test_success_status_other_than_no_content_is_rejected() {
        let notifier = Notifier::new(Arc::new(MockTransport::with_status(200)));
        let error = notifier.deliver(&sample_image()).await.unwrap_err();
        assert_eq!(error.provider_status(), Some(200));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let notifier = Notifier::new(Arc::new(MockTransport::failing("connection refused")));
        let error = notifier.deliver(&sample_image()).await.unwrap_err();
        assert!(matches!(error, DeliveryError::Transport(ref msg) if msg == "connection refused"));
    }
}
