//! アプリケーション層
//!
//! ドメインサービスとインフラを組み合わせたユースケース

pub mod use_cases;
