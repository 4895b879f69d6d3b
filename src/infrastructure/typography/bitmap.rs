use crate::domain::card::{TextBounds, Typeface, blend_pixel};
use font8x8::{
    BASIC_FONTS, BLOCK_FONTS, BOX_FONTS, GREEK_FONTS, HIRAGANA_FONTS, LATIN_FONTS, MISC_FONTS,
    UnicodeFonts,
};
use image::{Rgba, RgbaImage};

const CELL: u32 = 8;

/// 組み込みの 8x8 ビットマップ書体
///
/// フォントファイルが読み込めないときの代替。サイズは 8px の整数倍に丸める。
/// 収録されていない文字は中抜きの四角で描く。
#[derive(Debug, Default, Clone, Copy)]
pub struct BitmapTypeface;

impl BitmapTypeface {
    pub fn new() -> Self {
        Self
    }

    pub fn scale_for(size: f32) -> u32 {
        ((size / CELL as f32).round() as u32).max(1)
    }

    fn glyph(ch: char) -> [u8; 8] {
        BASIC_FONTS
            .get(ch)
            .or_else(|| LATIN_FONTS.get(ch))
            .or_else(|| GREEK_FONTS.get(ch))
            .or_else(|| HIRAGANA_FONTS.get(ch))
            .or_else(|| BOX_FONTS.get(ch))
            .or_else(|| BLOCK_FONTS.get(ch))
            .or_else(|| MISC_FONTS.get(ch))
            .unwrap_or(if ch.is_whitespace() {
                [0; 8]
            } else {
                MISSING_GLYPH
            })
    }
}

const MISSING_GLYPH: [u8; 8] = [
    0b0111_1110,
    0b0100_0010,
    0b0100_0010,
    0b0100_0010,
    0b0100_0010,
    0b0100_0010,
    0b0111_1110,
    0b0000_0000,
];

impl Typeface for BitmapTypeface {
    fn name(&self) -> &str {
        "builtin-8x8"
    }

    fn measure(&self, text: &str, size: f32) -> TextBounds {
        let cell = (CELL * Self::scale_for(size)) as i32;
        let chars = text.chars().count() as i32;
        TextBounds::new(0, 0, chars * cell, if chars == 0 { 0 } else { cell })
    }

    fn draw(
        &self,
        canvas: &mut RgbaImage,
        origin: (i32, i32),
        size: f32,
        color: Rgba<u8>,
        text: &str,
    ) {
        let scale = Self::scale_for(size) as i32;
        let cell = CELL as i32 * scale;

        for (index, ch) in text.chars().enumerate() {
            let glyph_x = origin.0 + index as i32 * cell;
            for (row, bits) in Self::glyph(ch).iter().enumerate() {
                for column in 0..CELL as i32 {
                    // bit 0 が左端
                    if bits & (1 << column) == 0 {
                        continue;
                    }
                    let x = glyph_x + column * scale;
                    let y = origin.1 + row as i32 * scale;
                    for dy in 0..scale {
                        for dx in 0..scale {
                            blend_pixel(canvas, x + dx, y + dy, color, 1.0);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_for_size() {
        assert_eq!(BitmapTypeface::scale_for(48.0), 6);
        assert_eq!(BitmapTypeface::scale_for(72.0), 9);
        assert_eq!(BitmapTypeface::scale_for(1.0), 1);
    }

    #[test]
    fn test_measure_counts_characters() {
        let typeface = BitmapTypeface::new();
        let bounds = typeface.measure("héllo", 48.0);
        assert_eq!(bounds.width(), 5 * 48);
        assert_eq!(bounds.height(), 48);
        assert_eq!(typeface.measure("", 48.0).width(), 0);
    }

    #[test]
    fn test_draw_stays_within_measured_bounds() {
        let typeface = BitmapTypeface::new();
        let mut canvas = RgbaImage::from_pixel(40, 20, Rgba([255, 255, 255, 255]));
        typeface.draw(&mut canvas, (4, 4), 8.0, Rgba([0, 0, 0, 255]), "AB");

        let inked: Vec<(u32, u32)> = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[0] == 0)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!inked.is_empty());
        assert!(inked.iter().all(|&(x, y)| (4..20).contains(&x) && (4..12).contains(&y)));
    }

    #[test]
    fn test_missing_glyph_still_leaves_ink() {
        let typeface = BitmapTypeface::new();
        let mut canvas = RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255]));
        typeface.draw(&mut canvas, (0, 0), 8.0, Rgba([0, 0, 0, 255]), "漢");
        assert!(canvas.pixels().any(|p| p.0[0] == 0));
    }

    #[test]
    fn test_space_is_blank() {
        let typeface = BitmapTypeface::new();
        let mut canvas = RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255]));
        typeface.draw(&mut canvas, (0, 0), 8.0, Rgba([0, 0, 0, 255]), " ");
        assert!(canvas.pixels().all(|p| p.0[0] == 255));
    }
}
