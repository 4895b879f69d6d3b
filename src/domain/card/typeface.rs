use super::value_objects::TextBounds;
use image::{Pixel, Rgba, RgbaImage};

/// カードの描画に使う書体
///
/// `measure` が返す領域は `draw` に渡す原点からの相対座標で、
/// 同じ原点で描画したときのインクの範囲と一致する。
pub trait Typeface: Send + Sync {
    fn name(&self) -> &str;

    fn measure(&self, text: &str, size: f32) -> TextBounds;

    fn draw(
        &self,
        canvas: &mut RgbaImage,
        origin: (i32, i32),
        size: f32,
        color: Rgba<u8>,
        text: &str,
    );
}

/// `coverage` (0.0..=1.0) を掛けた色をキャンバスの 1 ピクセルに合成する
///
/// キャンバス外の座標は無視される。
pub fn blend_pixel(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x as u32 >= canvas.width() || y as u32 >= canvas.height() {
        return;
    }

    let alpha = (color.0[3] as f32 * coverage.clamp(0.0, 1.0)).round() as u8;
    if alpha == 0 {
        return;
    }

    let mut source = color;
    source.0[3] = alpha;
    canvas.get_pixel_mut(x as u32, y as u32).blend(&source);
}
