//! Web インターフェース
//!
//! カード送信 API (`POST /send-image`)、疎通確認 (`GET /test`)、
//! ヘルスチェック (`GET /health`) を提供します。

mod error_response;
mod handlers;
mod models;

pub mod server;

pub use error_response::ErrorResponse;
pub use handlers::AppState;
pub use models::{DeliveryReport, MessageResponse, SendImageRequest};
