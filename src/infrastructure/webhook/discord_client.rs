use crate::domain::card::RenderedImage;
use crate::domain::delivery::{DeliveryError, DeliveryStatus, WebhookTransport};
use async_trait::async_trait;
use reqwest::Url;
use reqwest::multipart::{Form, Part};
use tracing::debug;

/// Discord の Webhook に multipart/form-data で画像を送るクライアント
pub struct DiscordWebhookClient {
    client: reqwest::Client,
    url: Url,
}

impl DiscordWebhookClient {
    /// Multipart field that carries the image.
    pub const FILE_FIELD: &'static str = "file";

    pub fn new(url: &str) -> Result<Self, DeliveryError> {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: &str) -> Result<Self, DeliveryError> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(DeliveryError::NotConfigured);
        }

        let url = Url::parse(trimmed).map_err(|e| DeliveryError::InvalidUrl {
            url: trimmed.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    fn form(image: &RenderedImage) -> Result<Form, DeliveryError> {
        let part = Part::bytes(image.bytes().to_vec())
            .file_name(RenderedImage::FILE_NAME)
            .mime_str(RenderedImage::CONTENT_TYPE)
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        Ok(Form::new().part(Self::FILE_FIELD, part))
    }
}

#[async_trait]
impl WebhookTransport for DiscordWebhookClient {
    async fn upload(&self, image: &RenderedImage) -> Result<DeliveryStatus, DeliveryError> {
        debug!(
            host = self.url.host_str().unwrap_or_default(),
            bytes = image.len(),
            "Uploading card to webhook"
        );

        let response = self
            .client
            .post(self.url.clone())
            .multipart(Self::form(image)?)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        Ok(DeliveryStatus::new(response.status().as_u16()))
    }
}
