//! インフラストラクチャ層
//!
//! フォントファイルの読み込みと Webhook への HTTP 送信を実装する

pub mod typography;
pub mod webhook;
