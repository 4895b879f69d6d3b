use crate::domain::card::{CardError, TextBounds, Typeface, blend_pixel};
use image::{Rgba, RgbaImage};
use rusttype::{Font, PositionedGlyph, Scale, point};
use std::path::Path;

/// TrueType / OpenType フォントファイルによる書体
pub struct OutlineTypeface {
    name: String,
    font: Font<'static>,
}

impl OutlineTypeface {
    pub fn from_file(path: &Path) -> Result<Self, CardError> {
        let font_load_error = |reason: String| CardError::FontLoad {
            path: path.display().to_string(),
            reason,
        };

        let data = std::fs::read(path).map_err(|e| font_load_error(e.to_string()))?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "outline".to_string());

        Self::from_vec(name, data)
            .ok_or_else(|| font_load_error("unsupported or corrupt font data".to_string()))
    }

    fn from_vec(name: String, data: Vec<u8>) -> Option<Self> {
        Font::try_from_vec(data).map(|font| Self { name, font })
    }

    /// 原点 (0, 0) を行の上端としてグリフを配置する
    fn layout(&self, text: &str, size: f32, origin: (i32, i32)) -> Vec<PositionedGlyph<'_>> {
        let scale = Scale::uniform(size);
        let baseline = origin.1 + self.font.v_metrics(scale).ascent.round() as i32;
        self.font
            .layout(text, scale, point(origin.0 as f32, baseline as f32))
            .collect()
    }
}

impl Typeface for OutlineTypeface {
    fn name(&self) -> &str {
        &self.name
    }

    fn measure(&self, text: &str, size: f32) -> TextBounds {
        self.layout(text, size, (0, 0))
            .iter()
            .filter_map(|glyph| glyph.pixel_bounding_box())
            .fold(None, |acc: Option<TextBounds>, bb| {
                Some(match acc {
                    None => TextBounds::new(bb.min.x, bb.min.y, bb.max.x, bb.max.y),
                    Some(b) => TextBounds::new(
                        b.left.min(bb.min.x),
                        b.top.min(bb.min.y),
                        b.right.max(bb.max.x),
                        b.bottom.max(bb.max.y),
                    ),
                })
            })
            .unwrap_or_default()
    }

    fn draw(
        &self,
        canvas: &mut RgbaImage,
        origin: (i32, i32),
        size: f32,
        color: Rgba<u8>,
        text: &str,
    ) {
        for glyph in self.layout(text, size, origin) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                blend_pixel(
                    canvas,
                    bb.min.x + gx as i32,
                    bb.min.y + gy as i32,
                    color,
                    coverage,
                );
            });
        }
    }
}
