//! 書体の読み込み
//!
//! 設定されたフォントファイルを読み込み、失敗した場合は組み込みの
//! ビットマップ書体に切り替える。

mod bitmap;
mod outline;

pub use bitmap::BitmapTypeface;
pub use outline::OutlineTypeface;

use crate::domain::card::Typeface;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

pub fn load_typeface(font_path: Option<&Path>) -> Arc<dyn Typeface> {
    let Some(path) = font_path else {
        info!("No font configured, using built-in bitmap typeface");
        return Arc::new(BitmapTypeface::new());
    };

    match OutlineTypeface::from_file(path) {
        Ok(typeface) => {
            info!(font = %path.display(), "Loaded font");
            Arc::new(typeface)
        }
        Err(e) => {
            warn!("{}", e);
            warn!("Falling back to built-in bitmap typeface.");
            Arc::new(BitmapTypeface::new())
        }
    }
}
