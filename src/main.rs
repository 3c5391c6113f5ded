use clap::Parser;
use showcase::utils::{logger, validation::Validate};
use showcase::{CliConfig, ShowcaseEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_logger(settings.log_format, settings.verbose);

    tracing::info!("Starting showcase");
    tracing::debug!("Resolved settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let engine = ShowcaseEngine::new(settings);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Page rendered successfully!");
            println!("📁 Output saved to: {}", output_path.display());
        }
        Err(e) => {
            tracing::error!("❌ Rendering failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(2);
        }
    }

    Ok(())
}
