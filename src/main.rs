use clap::Parser;
use siq_pack::utils::{logger, validation::Validate};
use siq_pack::{CliConfig, PackError, PackManifest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🚀 Starting siq-pack");
    tracing::info!("📁 Loading manifest from: {}", config.manifest.display());
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config) {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("❌ Package build failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}

fn run(config: &CliConfig) -> Result<(), PackError> {
    let manifest = PackManifest::from_file(&config.manifest)?;

    // 驗證 manifest
    manifest.validate()?;
    tracing::info!(
        "✅ Manifest loaded: {} rounds, {} questions",
        manifest.rounds.len(),
        manifest.question_count()
    );

    let mut pack = manifest.to_pack()?;

    if let Some(factor) = config.scale {
        tracing::info!("🔧 Scaling prices by {}", factor);
        pack.scale_price(factor);
    }

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - printing content.xml only");
        println!("{}", pack.render()?);
        return Ok(());
    }

    let output_path = pack.save(config.output_path(&manifest))?;

    tracing::info!("✅ Package saved to: {}", output_path.display());
    println!("✅ Package saved to: {}", output_path.display());

    Ok(())
}
