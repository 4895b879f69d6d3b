//! 透かしレイヤーの生成
//!
//! キャンバスの 2 倍の大きさの仮想レイヤーに透かし文字を縦に並べ、
//! 45 度回転させたものの中央をキャンバスサイズで切り出す。
//! 回転後のレイヤー全体は作らず、切り出す範囲の画素だけを
//! 回転前の座標へ逆写像して求める。

use super::typeface::Typeface;
use super::value_objects::CardStyle;
use image::{Pixel, Rgba, RgbaImage};

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

pub struct Watermark<'a> {
    typeface: &'a dyn Typeface,
    text: &'a str,
    style: &'a CardStyle,
}

impl<'a> Watermark<'a> {
    pub fn new(typeface: &'a dyn Typeface, text: &'a str, style: &'a CardStyle) -> Self {
        Self {
            typeface,
            text,
            style,
        }
    }

    /// `width` x `height` の透かしレイヤーを生成する
    pub fn render(&self, width: u32, height: u32) -> RgbaImage {
        let (stamp, anchor) = self.stamp();
        let origins = self.stamp_origins(width, height, anchor);
        let rotation = Rotation::new(self.style.watermark_angle_degrees);

        let (layer_width, layer_height) = (i64::from(width) * 2, i64::from(height) * 2);
        let (stamp_width, stamp_height) = (i64::from(stamp.width()), i64::from(stamp.height()));
        let (half_width, half_height) = (width as f32 / 2.0, height as f32 / 2.0);

        RgbaImage::from_fn(width, height, |x, y| {
            let (dx, dy) = rotation.source_of(
                x as f32 + 0.5 - half_width,
                y as f32 + 0.5 - half_height,
            );
            // 仮想レイヤーの中心は (width, height)
            let layer_x = (dx + width as f32).floor() as i64;
            let layer_y = (dy + height as f32).floor() as i64;
            if layer_x < 0 || layer_y < 0 || layer_x >= layer_width || layer_y >= layer_height {
                return TRANSPARENT;
            }

            let mut pixel = TRANSPARENT;
            for &(left, top) in &origins {
                let (u, v) = (layer_x - left, layer_y - top);
                if u >= 0 && v >= 0 && u < stamp_width && v < stamp_height {
                    pixel.blend(stamp.get_pixel(u as u32, v as u32));
                }
            }
            pixel
        })
    }

    /// 透かし文字 1 つ分のインク領域を切り出した画像と、そのインク中心
    fn stamp(&self) -> (RgbaImage, (i32, i32)) {
        let size = self.style.watermark_font_size;
        let bounds = self.typeface.measure(self.text, size);

        let mut stamp = RgbaImage::from_pixel(bounds.width(), bounds.height(), TRANSPARENT);
        self.typeface.draw(
            &mut stamp,
            (-bounds.left, -bounds.top),
            size,
            self.style.watermark_color,
            self.text,
        );

        let anchor = (bounds.width() as i32 / 2, bounds.height() as i32 / 2);
        (stamp, anchor)
    }

    /// 仮想レイヤー上での各スタンプの左上座標
    fn stamp_origins(&self, width: u32, height: u32, anchor: (i32, i32)) -> Vec<(i64, i64)> {
        let center_x = i64::from(width);
        let half_height = i64::from(height / 2);
        (-self.style.watermark_repeat..=self.style.watermark_repeat)
            .map(|i| {
                let center_y = i64::from(height) + i64::from(i) * half_height;
                (
                    center_x - i64::from(anchor.0),
                    center_y - i64::from(anchor.1),
                )
            })
            .collect()
    }
}

/// Counter-clockwise rotation about the layer centre.
struct Rotation {
    sin: f32,
    cos: f32,
}

impl Rotation {
    fn new(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self { sin, cos }
    }

    /// Maps an offset from the centre of the rotated image back to the unrotated one.
    fn source_of(&self, dx: f32, dy: f32) -> (f32, f32) {
        (
            self.cos * dx - self.sin * dy,
            self.sin * dx + self.cos * dy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::typography::BitmapTypeface;

    fn assert_close(actual: (f32, f32), expected: (f32, f32)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-4 && (actual.1 - expected.1).abs() < 1e-4,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn test_rotation_identity() {
        assert_close(Rotation::new(0.0).source_of(3.0, -2.0), (3.0, -2.0));
    }

    #[test]
    fn test_rotation_is_counter_clockwise() {
        // 回転後に中心の真上にある画素は、回転前は中心の右にあった
        assert_close(Rotation::new(90.0).source_of(0.0, -5.0), (5.0, 0.0));
    }

    #[test]
    fn test_watermark_layer_has_ink() {
        let typeface = BitmapTypeface::new();
        let style = CardStyle::default();
        let watermark = Watermark::new(&typeface, "WATERMARK", &style);

        let layer = watermark.render(340, 148);
        assert_eq!(layer.dimensions(), (340, 148));
        assert!(layer.pixels().any(|p| p.0[3] > 0));
        assert!(layer.pixels().all(|p| p.0[3] <= style.watermark_color.0[3]));
    }

    #[test]
    fn test_watermark_crosses_the_centre() {
        // 中央のスタンプは回転の中心に置かれる
        let typeface = BitmapTypeface::new();
        let style = CardStyle::default();
        let layer = Watermark::new(&typeface, "##########", &style).render(400, 400);

        let inked = (190..210)
            .flat_map(|y| (190..210).map(move |x| (x, y)))
            .any(|(x, y)| layer.get_pixel(x, y).0[3] > 0);
        assert!(inked);
    }

    #[test]
    fn test_wide_canvas_keeps_watermark() {
        let typeface = BitmapTypeface::new();
        let style = CardStyle::default();
        let layer = Watermark::new(&typeface, "WATERMARK", &style).render(8740, 148);

        assert_eq!(layer.dimensions(), (8740, 148));
        assert!(layer.pixels().any(|p| p.0[3] > 0));
    }
}
