mod cli;

use crate::cli::{Cli, Commands, LogFormat};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

use text_card_notifier::application::use_cases::{
    RenderCardUseCase, RunApplicationUseCase,
};
use text_card_notifier::debug::debug_helpers::log_system_info;
use text_card_notifier::debug::{DebugConfig, init_logging};
use text_card_notifier::domain::card::CardComposer;
use text_card_notifier::infrastructure::typography::load_typeface;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let mut debug_config = if cli.verbose {
        DebugConfig::development()
    } else {
        DebugConfig::default()
    };
    debug_config.use_json_format = cli.log_format == LogFormat::Json;
    if let Some(dir) = &cli.log_dir {
        debug_config.enable_file_logging = true;
        debug_config.log_directory = dir.clone();
    }
    if let Err(e) = init_logging(&debug_config) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    log_system_info();

    let config = cli.app_config();

    match &cli.command {
        Commands::Run { .. } => {
            info!("Starting application...");
            let use_case = RunApplicationUseCase::new(config);

            if let Err(e) = use_case.execute().await {
                error!("Application failed: {:#}", e);
                eprintln!("❌ Application failed: {:#}", e);
                std::process::exit(1);
            }
            info!("Application terminated normally");
        }
        Commands::Render { text, output } => {
            let typeface = load_typeface(config.font_path.as_deref());
            let composer = Arc::new(CardComposer::new(typeface, config.watermark_text.clone())?);
            let use_case = RenderCardUseCase::new(composer);

            match use_case.execute(text, output).await {
                Ok(image) => {
                    println!(
                        "✅ Card written to {} ({}x{})",
                        output.display(),
                        image.width(),
                        image.height()
                    );
                }
                Err(e) => {
                    error!("Render failed: {:#}", e);
                    eprintln!("❌ Render failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Send { text } => {
            let use_case = RunApplicationUseCase::build_send_card(&config)?;

            match use_case.execute(text).await {
                Ok(status) => {
                    println!("✅ Card delivered (status {})", status);
                }
                Err(e) => {
                    error!("Send failed: {}", e);
                    eprintln!("❌ Send failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
