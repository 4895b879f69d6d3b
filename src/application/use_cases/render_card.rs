use super::send_card::compose_blocking;
use crate::domain::card::{CardComposer, CardText, RenderedImage};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// カードを描画してファイルに書き出す（配信はしない）
pub struct RenderCardUseCase {
    composer: Arc<CardComposer>,
}

impl RenderCardUseCase {
    pub fn new(composer: Arc<CardComposer>) -> Self {
        Self { composer }
    }

    pub async fn execute(&self, raw_text: &str, output: &Path) -> anyhow::Result<RenderedImage> {
        let text = CardText::parse(raw_text)?;
        let image = compose_blocking(&self.composer, text).await?;

        tokio::fs::write(output, image.bytes()).await?;
        info!(
            path = %output.display(),
            width = image.width(),
            height = image.height(),
            "Card written"
        );

        Ok(image)
    }
}
