//! # Text Card Notifier
//!
//! 短いテキストを透かし入りの PNG カードに描画し、
//! Discord の Webhook に送信する小さな HTTP サービス
//!
//! 以下の層に分かれています：
//!
//! - **Domain Layer**: カード生成と配信のモデル
//! - **Application Layer**: ユースケース
//! - **Infrastructure Layer**: フォント読み込みと Webhook クライアント
//! - **Interface Layer**: Web API

pub mod application;
pub mod debug;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

// 公開API
pub use domain::*;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5302;

/// `WATERMARK_TEXT` が未設定のときの透かし文字
pub const DEFAULT_WATERMARK_TEXT: &str = "哈狗帮";

/// アプリケーション全体の設定
///
/// 起動時に一度だけ組み立て、各コンポーネントに渡す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub webhook_url: Option<String>,
    pub watermark_text: String,
    pub font_path: Option<PathBuf>,
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            watermark_text: DEFAULT_WATERMARK_TEXT.to_string(),
            font_path: None,
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}
