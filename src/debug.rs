//! デバッグとログ機能
//!
//! ログの初期化、処理時間の計測、エラーチェーンの出力を提供

use std::fs;
use tracing::{Level, debug, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// デバッグ設定
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// ログレベル
    pub log_level: Level,
    /// ファイルログを有効にするか
    pub enable_file_logging: bool,
    /// ログファイルのディレクトリ
    pub log_directory: String,
    /// JSONフォーマットを使用するか（コンソール出力時）
    pub use_json_format: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            enable_file_logging: false,
            log_directory: "logs".to_string(),
            use_json_format: false,
        }
    }
}

impl DebugConfig {
    /// 開発環境用の設定
    pub fn development() -> Self {
        Self {
            log_level: Level::DEBUG,
            ..Self::default()
        }
    }

    /// `RUST_LOG` が未設定のときに使うフィルター
    pub fn default_directive(&self) -> String {
        let level = self.log_level.as_str().to_lowercase();
        format!("{}={level},tower_http={level}", env!("CARGO_CRATE_NAME"))
    }
}

/// ログシステムを初期化
pub fn init_logging(config: &DebugConfig) -> Result<(), Box<dyn std::error::Error>> {
    // ログディレクトリを作成
    if config.enable_file_logging {
        fs::create_dir_all(&config.log_directory)?;
    }

    // 環境変数からのフィルター設定
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.default_directive()))?;

    if config.enable_file_logging {
        let file_appender = RollingFileAppender::new(
            Rotation::DAILY,
            &config.log_directory,
            "text-card-notifier.log",
        );

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(file_appender)
            .json()
            .try_init()
            .map_err(|e| e as Box<dyn std::error::Error>)?;
    } else if config.use_json_format {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .try_init()
            .map_err(|e| e as Box<dyn std::error::Error>)?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .try_init()
            .map_err(|e| e as Box<dyn std::error::Error>)?;
    }

    info!("Logging initialized");
    debug!("Debug config: {:?}", config);

    Ok(())
}

/// パフォーマンス測定用のマクロ
#[macro_export]
macro_rules! measure_time {
    ($name:expr, $block:block) => {{
        let start = std::time::Instant::now();
        let result = $block;
        let duration = start.elapsed();
        tracing::debug!(
            operation = $name,
            duration_ms = duration.as_millis() as u64,
            "Operation finished"
        );
        result
    }};
}

/// デバッグ用のヘルパー関数
pub mod debug_helpers {
    use tracing::{error, info};

    /// 起動時の環境情報をログに出力
    pub fn log_system_info() {
        info!(
            version = env!("CARGO_PKG_VERSION"),
            os = std::env::consts::OS,
            arch = std::env::consts::ARCH,
            "Starting text-card-notifier"
        );
    }

    /// エラーの詳細情報をログに出力
    pub fn log_error_details(error: &dyn std::error::Error, context: &str) {
        error!(context = context, error = %error, "Request failed");

        // エラーチェーンをログに出力
        let mut source = error.source();
        let mut level = 1;
        while let Some(err) = source {
            error!(
                context = context,
                level = level,
                source_error = %err,
                "Caused by"
            );
            source = err.source();
            level += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_default_directive() {
        let directive = DebugConfig::development().default_directive();
        assert!(directive.starts_with("text_card_notifier=debug"));
        assert!(DebugConfig::default().default_directive().contains("tower_http=info"));
    }

    #[test]
    fn test_development_keeps_console_output() {
        let config = DebugConfig::development();
        assert!(!config.enable_file_logging);
        assert!(!config.use_json_format);
    }

    #[test]
    #[traced_test]
    fn test_performance_measurement() {
        let result = measure_time!("test_operation", {
            std::thread::sleep(std::time::Duration::from_millis(5));
            42
        });
        assert_eq!(result, 42);
        assert!(logs_contain("test_operation"));
    }

    #[test]
    #[traced_test]
    fn test_log_error_details_walks_sources() {
        #[derive(thiserror::Error, Debug)]
        #[error("outer failure")]
        struct Outer(#[source] std::io::Error);

        let outer = Outer(std::io::Error::other("disk on fire"));
        debug_helpers::log_error_details(&outer, "unit-test");
        assert!(logs_contain("unit-test"));
        assert!(logs_contain("disk on fire"));
    }
}
