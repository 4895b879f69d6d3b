//! カードの値オブジェクト
//!
//! 入力テキストの正規化、レイアウト定数、生成済み画像を表す

use super::errors::CardError;
use image::Rgba;
use std::fmt;

/// 正規化済みのカード本文
///
/// リテラルの `\n` を改行に置き換え、各行をトリムし、空行を取り除いたもの。
/// 少なくとも 1 行を持つことが保証される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardText {
    lines: Vec<String>,
}

impl CardText {
    pub fn parse(raw: &str) -> Result<Self, CardError> {
        let lines: Vec<String> = raw
            .replace("\\n", "\n")
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if lines.is_empty() {
            return Err(CardError::EmptyInput);
        }

        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl fmt::Display for CardText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// テキストのインク領域（描画原点からの相対座標）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> u32 {
        (self.right - self.left).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top).max(0) as u32
    }
}

/// カードのレイアウトと配色
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    pub font_size: f32,
    pub watermark_font_size: f32,
    pub line_spacing: f32,
    pub padding: u32,
    pub shadow_offset: i32,
    pub watermark_angle_degrees: f32,
    /// Copies stamped above and below the centre line of the watermark layer.
    pub watermark_repeat: i32,
    /// 描画できるキャンバスの最大画素数
    pub max_canvas_pixels: u64,
    pub background: Rgba<u8>,
    pub text_color: Rgba<u8>,
    pub shadow_color: Rgba<u8>,
    pub watermark_color: Rgba<u8>,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            font_size: 48.0,
            watermark_font_size: 72.0,
            line_spacing: 1.5,
            padding: 50,
            shadow_offset: 2,
            watermark_angle_degrees: 45.0,
            watermark_repeat: 2,
            max_canvas_pixels: 64 * 1024 * 1024,
            background: Rgba([255, 255, 255, 255]),
            text_color: Rgba([0, 0, 0, 255]),
            shadow_color: Rgba([128, 128, 128, 180]),
            watermark_color: Rgba([255, 192, 203, 60]),
        }
    }
}

impl CardStyle {
    /// 行間のピクセル数
    pub fn line_spacing_px(&self) -> u32 {
        (self.font_size * self.line_spacing) as u32
    }
}

/// PNG にエンコード済みのカード画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl RenderedImage {
    pub const CONTENT_TYPE: &'static str = "image/png";
    pub const FILE_NAME: &'static str = "output.png";

    pub fn new(bytes: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            bytes,
            width,
            height,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
