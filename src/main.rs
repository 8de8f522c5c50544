// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use changelog_harvest::utils::logging::{format_info, format_success, format_warning};
use changelog_harvest::{ArchiveFetcher, Config, ExtractPipeline};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "changelog_harvest")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Harvests QGIS changelog archives and extracts feature records to CSV", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download changelog archives for every configured version
    Fetch {
        #[arg(long, value_name = "NUM")]
        limit: Option<usize>,
    },

    /// Parse downloaded archives and write the feature record CSV
    Extract {
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    changelog_harvest::utils::logging::init_logger(cli.color, cli.verbose);

    info!("QGIS changelog harvester");
    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    match cli.command {
        Commands::Fetch { limit } => {
            cmd_fetch(&config, limit).await?;
        }
        Commands::Extract { output } => {
            cmd_extract(config, output, cli.color)?;
        }
    }

    Ok(())
}

async fn cmd_fetch(config: &Config, limit: Option<usize>) -> Result<()> {
    let versions = match limit {
        Some(limit) => &config.versions[..limit.min(config.versions.len())],
        None => &config.versions[..],
    };

    info!("Fetching archives for {} versions", versions.len());

    let fetcher = ArchiveFetcher::new(config.fetch.clone()).context("Failed to create fetcher")?;
    let stats = fetcher
        .fetch_all(versions)
        .await
        .context("Download directory is unusable")?;

    println!();
    println!("{}", format_info(&format!("Already present: {}", stats.skipped)));
    println!("{}", format_success(&format!("Downloaded: {}", stats.downloaded)));
    if stats.failed > 0 {
        println!("{}", format_warning(&format!("Failed: {}", stats.failed)));
    }
    if stats.attempted() > 0 {
        let rate = (stats.downloaded as f64 / stats.attempted() as f64) * 100.0;
        println!("{}", format_info(&format!("Success rate: {:.1}%", rate)));
    }
    println!(
        "{}",
        format_info(&format!(
            "Archive location: {}",
            config.fetch.download_dir.display()
        ))
    );

    Ok(())
}

fn cmd_extract(mut config: Config, output: Option<PathBuf>, colored: bool) -> Result<()> {
    if let Some(output) = output {
        config.extract.output_path = output;
    }

    info!(
        "Extracting feature records from archives in {}",
        config.fetch.download_dir.display()
    );

    let pipeline = ExtractPipeline::new(config, colored);
    let report = pipeline.run().context("Extraction failed to produce output")?;

    println!();
    println!(
        "{}",
        format_success(&format!(
            "Versions processed: {}/{}",
            report.stats.versions_processed,
            report.stats.versions_total()
        ))
    );
    if report.stats.versions_skipped > 0 {
        println!(
            "{}",
            format_warning(&format!("Versions skipped: {}", report.stats.versions_skipped))
        );
    }
    println!(
        "{}",
        format_info(&format!(
            "Documents parsed: {} (skipped: {})",
            report.stats.documents_parsed, report.stats.documents_skipped
        ))
    );
    println!(
        "{}",
        format_success(&format!(
            "Extracted {} records to {}",
            report.stats.records_extracted,
            report.output_path.display()
        ))
    );
    println!(
        "{}",
        format_info(&format!("Elapsed: {:.1}s", report.stats.duration_secs))
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_version_matches_package() {
        assert_eq!(Cli::command().get_version(), Some(env!("CARGO_PKG_VERSION")));
    }
}
