use super::errors::CardError;
use super::layout::CardLayout;
use super::typeface::Typeface;
use super::value_objects::{CardStyle, CardText, RenderedImage};
use super::watermark::Watermark;
use crate::measure_time;
use image::{DynamicImage, ImageFormat, RgbaImage, imageops};
use std::io::Cursor;
use std::sync::Arc;
use tracing::debug;

/// テキストから透かし入りのカード画像を生成するサービス
pub struct CardComposer {
    typeface: Arc<dyn Typeface>,
    style: CardStyle,
    watermark_text: String,
}

impl CardComposer {
    /// 透かし文字が空白だけの場合は `CardError::BlankWatermark`
    pub fn new(
        typeface: Arc<dyn Typeface>,
        watermark_text: impl Into<String>,
    ) -> Result<Self, CardError> {
        let watermark_text = watermark_text.into();
        if watermark_text.trim().is_empty() {
            return Err(CardError::BlankWatermark);
        }

        Ok(Self {
            typeface,
            style: CardStyle::default(),
            watermark_text,
        })
    }

    pub fn typeface_name(&self) -> &str {
        self.typeface.name()
    }

    /// カードを描画し PNG にエンコードする
    pub fn compose(&self, text: &CardText) -> Result<RenderedImage, CardError> {
        measure_time!("compose_card", {
            let canvas = self.render(text)?;
            let (width, height) = canvas.dimensions();
            let bytes = encode_png(canvas)?;

            debug!(
                width,
                height,
                lines = text.line_count(),
                bytes = bytes.len(),
                typeface = self.typeface.name(),
                "Card composed"
            );

            Ok(RenderedImage::new(bytes, width, height))
        })
    }

    /// エンコード前のラスタ画像を返す
    pub fn render(&self, text: &CardText) -> Result<RgbaImage, CardError> {
        let layout = CardLayout::compute(text, self.typeface.as_ref(), &self.style)?;
        let mut canvas = RgbaImage::from_pixel(layout.width, layout.height, self.style.background);

        let watermark = Watermark::new(self.typeface.as_ref(), &self.watermark_text, &self.style)
            .render(layout.width, layout.height);
        imageops::overlay(&mut canvas, &watermark, 0, 0);

        let offset = self.style.shadow_offset;
        for line in &layout.lines {
            self.typeface.draw(
                &mut canvas,
                (line.x + offset, line.y + offset),
                self.style.font_size,
                self.style.shadow_color,
                &line.text,
            );
            self.typeface.draw(
                &mut canvas,
                (line.x, line.y),
                self.style.font_size,
                self.style.text_color,
                &line.text,
            );
        }

        Ok(canvas)
    }
}

fn encode_png(canvas: RgbaImage) -> Result<Vec<u8>, CardError> {
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(canvas)
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| CardError::Encode(e.to_string()))?;
    Ok(buffer.into_inner())
}
