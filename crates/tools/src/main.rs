use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use site_tools::audit::AuditReport;
use site_tools::config::{self, Config};
use site_tools::extract_images::extract_image_urls;
use site_tools::normalize_products::normalize_products;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "site-tools")]
#[command(about = "Content tooling for the O&P Ingeniería site", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to site-tools.toml next to the executable)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect image URLs from a JSON export
    #[command(name = "extract-images")]
    ExtractImages {
        input: PathBuf,
        /// Output file (defaults to <output.dir>/extracted-images.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Add categoryId to every product of an export
    #[command(name = "normalize-products")]
    NormalizeProducts {
        products: PathBuf,
        categories: PathBuf,
        /// Output file (defaults to <output.dir>/products_normalized.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report alias collisions and unmatched items in the bundled data
    Audit {
        /// Exit with an error when any issue is found
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::ExtractImages { input, output } => {
            let dump = read_json(&input)?;
            let urls = extract_image_urls(&dump, &config.site.base_url);
            tracing::info!("Found {} images", urls.len());
            for (index, url) in urls.iter().enumerate() {
                tracing::debug!("{}: {}", index + 1, url);
            }
            let path = output.unwrap_or_else(|| config::output_path(&config, "extracted-images.json"));
            write_json(&path, &urls)?;
        }
        Commands::NormalizeProducts {
            products,
            categories,
            output,
        } => {
            let (normalized, stats) =
                normalize_products(read_json(&products)?, read_json(&categories)?)?;
            tracing::info!(
                "Normalized {} products ({} mapped, {} kept as-is, {} without category)",
                stats.total,
                stats.mapped,
                stats.passthrough,
                stats.uncategorized
            );
            let path =
                output.unwrap_or_else(|| config::output_path(&config, "products_normalized.json"));
            write_json(&path, &normalized)?;
        }
        Commands::Audit { strict } => run_audit(&config, strict)?,
    }

    Ok(())
}

fn run_audit(config: &Config, strict: bool) -> anyhow::Result<()> {
    let site = contracts::data::SiteData::load(contracts::data::asset_base())
        .context("bundled data failed to load")?;
    let report = AuditReport::build(&site, chrono::Utc::now());
    write_json(&config::output_path(config, "audit-report.json"), &report)?;
    report.check(strict)?;
    Ok(())
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let contents = serde_json::to_string_pretty(value)?;
    std::fs::write(path, contents).with_context(|| format!("cannot write {}", path.display()))?;
    tracing::info!("Written: {}", path.display());
    Ok(())
}
