use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use text_card_notifier::{AppConfig, DEFAULT_PORT, DEFAULT_WATERMARK_TEXT};

#[derive(Parser, Debug)]
#[command(
    name = "text-card-notifier",
    version,
    about = "Renders short texts as watermarked cards and posts them to a Discord webhook",
    long_about = "Renders short texts as watermarked PNG cards and posts them to a Discord webhook, either from an HTTP API or from the command line"
)]
pub struct Cli {
    #[command(flatten)]
    pub card: CardOptions,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write JSON logs to a daily rolling file in this directory
    #[arg(long, global = true, env = "LOG_DIR")]
    pub log_dir: Option<String>,

    /// Console log format
    #[arg(long, global = true, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct CardOptions {
    /// Discord webhook URL that receives the cards
    #[arg(long, global = true, env = "WEBHOOK_URL", hide_env_values = true)]
    pub webhook_url: Option<String>,

    /// Text stamped diagonally across every card
    #[arg(long, global = true, env = "WATERMARK_TEXT", default_value = DEFAULT_WATERMARK_TEXT)]
    pub watermark_text: String,

    /// TrueType/OpenType font; the built-in bitmap font is used if missing
    #[arg(long, global = true, env = "FONT_PATH")]
    pub font_path: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web server
    Run {
        /// Port to bind the web server to
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Host to bind the web server to
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
    },
    /// Render a card to a PNG file without sending it
    Render {
        /// Card text; `\n` starts a new line
        text: String,
        /// Output file
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,
    },
    /// Render a card and send it to the webhook once
    Send {
        /// Card text; `\n` starts a new line
        text: String,
    },
}

impl Cli {
    pub fn app_config(&self) -> AppConfig {
        let mut config = AppConfig {
            webhook_url: self.card.webhook_url.clone(),
            watermark_text: self.card.watermark_text.clone(),
            font_path: self.card.font_path.clone(),
            ..AppConfig::default()
        };

        if let Commands::Run { port, host } = &self.command {
            config.port = *port;
            config.host = host.clone();
        }

        config
    }
}
