use crate::config::manifest::PackManifest;
use crate::core::archive::DEFAULT_PACKAGE_PATH;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "siq-pack")]
#[command(about = "Build SIGame .siq packages from a TOML manifest")]
pub struct CliConfig {
    /// Path to the TOML pack manifest
    pub manifest: PathBuf,

    /// Output package path (overrides `pack.output`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Multiply every question price before saving
    #[arg(long, allow_hyphen_values = true)]
    pub scale: Option<i64>,

    /// Print content.xml instead of writing the package
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 命令列 > manifest > 預設 package.siq
    pub fn output_path(&self, manifest: &PackManifest) -> PathBuf {
        self.output
            .clone()
            .or_else(|| manifest.output_path())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PACKAGE_PATH))
    }
}
