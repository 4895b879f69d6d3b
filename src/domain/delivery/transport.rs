use super::errors::DeliveryError;
use super::value_objects::DeliveryStatus;
use crate::domain::card::RenderedImage;
use async_trait::async_trait;

/// カード画像を外部の Webhook にアップロードする手段
///
/// 実装はプロバイダの応答ステータスをそのまま返す。
/// ステータスの解釈は [`super::Notifier`] が行う。
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    async fn upload(&self, image: &RenderedImage) -> Result<DeliveryStatus, DeliveryError>;
}
