//! カードのレイアウト計算
//!
//! 各行のインク領域を測り、キャンバスサイズと行ごとの描画位置を決める

use super::errors::CardError;
use super::typeface::Typeface;
use super::value_objects::{CardStyle, CardText, TextBounds};

/// 1 行分の配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePlacement {
    pub text: String,
    pub bounds: TextBounds,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub width: u32,
    pub height: u32,
    pub lines: Vec<LinePlacement>,
}

impl CardLayout {
    pub fn compute(
        text: &CardText,
        typeface: &dyn Typeface,
        style: &CardStyle,
    ) -> Result<Self, CardError> {
        let measured: Vec<(String, TextBounds)> = text
            .lines()
            .iter()
            .map(|line| (line.clone(), typeface.measure(line, style.font_size)))
            .collect();

        let max_width = measured
            .iter()
            .map(|(_, bounds)| u64::from(bounds.width()))
            .max()
            .unwrap_or(0);
        let total_height: u64 = measured
            .iter()
            .map(|(_, bounds)| u64::from(bounds.height()))
            .sum();

        let spacing = u64::from(style.line_spacing_px());
        let padding = u64::from(style.padding);
        let gaps = measured.len().saturating_sub(1) as u64;

        let width = max_width + padding * 2;
        let height = total_height + spacing * gaps + padding * 2;

        if width.saturating_mul(height) > style.max_canvas_pixels {
            return Err(CardError::CanvasTooLarge { width, height });
        }
        let (width, height) = (width as u32, height as u32);

        let mut lines = Vec::with_capacity(measured.len());
        let mut cursor_y = style.padding as i32;
        for (text, bounds) in measured {
            let x = (width as i32 - bounds.width() as i32) / 2;
            lines.push(LinePlacement {
                text,
                bounds,
                x,
                y: cursor_y,
            });
            cursor_y += (bounds.height() + style.line_spacing_px()) as i32;
        }

        Ok(Self {
            width,
            height,
            lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::typography::BitmapTypeface;

    fn layout_of(raw: &str) -> CardLayout {
        let text = CardText::parse(raw).unwrap();
        CardLayout::compute(&text, &BitmapTypeface::new(), &CardStyle::default()).unwrap()
    }

    #[test]
    fn test_single_line_dimensions() {
        // 48px のビットマップ書体は 1 文字 48x48
        let layout = layout_of("Hello");
        assert_eq!(layout.width, 5 * 48 + 100);
        assert_eq!(layout.height, 48 + 100);
        assert_eq!(layout.lines.len(), 1);
        assert_eq!(layout.lines[0].x, 50);
        assert_eq!(layout.lines[0].y, 50);
    }

    #[test]
    fn test_width_covers_widest_line_plus_padding() {
        let layout = layout_of("Line One\nLine Two, longer");
        let widest = layout.lines.iter().map(|line| line.bounds.width()).max().unwrap();
        assert_eq!(widest, "Line Two, longer".chars().count() as u32 * 48);
        assert_eq!(layout.width, widest + CardStyle::default().padding * 2);
    }

    #[test]
    fn test_lines_are_centered_and_stacked() {
        let layout = layout_of("abc\nabcdef");
        let first = &layout.lines[0];
        let second = &layout.lines[1];

        assert_eq!(first.x, (layout.width as i32 - 3 * 48) / 2);
        assert_eq!(second.x, 50);
        assert_eq!(second.y, first.y + 48 + 72);
    }

    #[test]
    fn test_height_is_monotonic_in_line_count() {
        let mut previous = 0;
        let mut raw = String::new();
        for i in 0..8 {
            raw.push_str(&format!("line {i}\n"));
            let layout = layout_of(&raw);
            assert!(layout.height >= previous);
            previous = layout.height;
        }
    }

    #[test]
    fn test_long_lines_and_many_lines_fit() {
        let wide = layout_of(&"a".repeat(2000));
        assert_eq!(wide.width, 2000 * 48 + 100);

        let tall = layout_of(&vec!["line"; 1000].join("\n"));
        assert_eq!(tall.height, 1000 * 48 + 999 * 72 + 100);
    }

    #[test]
    fn test_pixel_budget_is_enforced() {
        let style = CardStyle {
            max_canvas_pixels: 10_000,
            ..CardStyle::default()
        };
        let text = CardText::parse("Hello").unwrap();
        let result = CardLayout::compute(&text, &BitmapTypeface::new(), &style);
        assert!(matches!(
            result,
            Err(CardError::CanvasTooLarge {
                width: 340,
                height: 148
            })
        ));
    }
}
