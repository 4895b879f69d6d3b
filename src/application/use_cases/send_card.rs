use crate::domain::card::{CardComposer, CardError, CardText, RenderedImage};
use crate::domain::delivery::{DeliveryError, DeliveryStatus, Notifier};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum SendCardError {
    #[error(transparent)]
    Card(#[from] CardError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("Card rendering task failed: {0}")]
    Internal(String),
}

/// テキストをカードにして Webhook に送る
#[derive(Clone)]
pub struct SendCardUseCase {
    composer: Arc<CardComposer>,
    notifier: Arc<Notifier>,
}

impl SendCardUseCase {
    pub fn new(composer: Arc<CardComposer>, notifier: Arc<Notifier>) -> Self {
        Self { composer, notifier }
    }

    pub async fn execute(&self, raw_text: &str) -> Result<DeliveryStatus, SendCardError> {
        let text = CardText::parse(raw_text)?;
        info!(lines = text.line_count(), "Sending card");

        let image = self.compose(text).await?;
        Ok(self.notifier.deliver(&image).await?)
    }

    pub async fn compose(&self, text: CardText) -> Result<RenderedImage, SendCardError> {
        compose_blocking(&self.composer, text).await
    }
}

/// 描画は CPU を使うためブロッキング用スレッドで行う
pub(crate) async fn compose_blocking(
    composer: &Arc<CardComposer>,
    text: CardText,
) -> Result<RenderedImage, SendCardError> {
    let composer = Arc::clone(composer);
    let image = tokio::task::spawn_blocking(move || composer.compose(&text))
        .await
        .map_err(|e| SendCardError::Internal(e.to_string()))??;
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::typography::BitmapTypeface;
    use crate::infrastructure::webhook::MockTransport;

    fn use_case(transport: Arc<MockTransport>) -> SendCardUseCase {
        let composer = Arc::new(CardComposer::new(Arc::new(BitmapTypeface::new()), "WM").unwrap());
        SendCardUseCase::new(composer, Arc::new(Notifier::new(transport)))
    }

    #[tokio::test]
    async fn test_send_card_uploads_png() {
        let transport = Arc::new(MockTransport::with_status(204));
        let status = use_case(transport.clone())
            .execute("Title\\nBody")
            .await
            .unwrap();

        assert!(status.is_accepted());
        let uploads = transport.uploads().await;
        assert_eq!(uploads.len(), 1);
        assert!(image::load_from_memory(&uploads[0].bytes).is_ok());
    }

    #[tokio::test]
    async fn test_blank_text_is_not_uploaded() {
        let transport = Arc::new(MockTransport::with_status(204));
        let error = use_case(transport.clone()).execute(" \\n ").await.unwrap_err();

        assert!(matches!(error, SendCardError::Card(CardError::EmptyInput)));
        assert_eq!(transport.upload_count().await, 0);
    }

    #[tokio::test]
    async fn test_rejected_delivery() {
        let transport = Arc::new(MockTransport::with_status(401));
        let error = use_case(transport).execute("hello").await.unwrap_err();
        assert!(matches!(
            error,
            SendCardError::Delivery(DeliveryError::Rejected { status: 401 })
        ));
    }

    #[test]
    fn test_compose_on_blocking_pool() {
        let use_case = use_case(Arc::new(MockTransport::new()));
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let image = runtime
            .block_on(use_case.compose(CardText::parse("hi").unwrap()))
            .unwrap();
        assert_eq!(image.height(), 8 * 6 + 100);
    }
}
