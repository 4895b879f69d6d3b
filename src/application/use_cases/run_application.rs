use super::send_card::SendCardUseCase;
use crate::AppConfig;
use crate::domain::card::CardComposer;
use crate::domain::delivery::Notifier;
use crate::infrastructure::typography::load_typeface;
use crate::infrastructure::webhook::DiscordWebhookClient;
use crate::interfaces::web::AppState;
use crate::interfaces::web::server::create_server;
use std::sync::Arc;
use tracing::info;

pub struct RunApplicationUseCase {
    config: AppConfig,
}

impl RunApplicationUseCase {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// 設定から依存関係を組み立てる
    pub fn build_send_card(config: &AppConfig) -> anyhow::Result<SendCardUseCase> {
        let typeface = load_typeface(config.font_path.as_deref());
        let composer = Arc::new(CardComposer::new(typeface, config.watermark_text.clone())?);
        info!(typeface = composer.typeface_name(), "Card composer ready");

        let webhook_url = config.webhook_url.as_deref().unwrap_or_default();
        let transport = Arc::new(DiscordWebhookClient::new(webhook_url)?);
        let notifier = Arc::new(Notifier::new(transport));

        Ok(SendCardUseCase::new(composer, notifier))
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        let send_card = Self::build_send_card(&self.config)?;
        let state = Arc::new(AppState::new(send_card));

        // Delegate to the web server module
        create_server(state, &self.config.host, self.config.port).await
    }
}
