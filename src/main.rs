use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sales_treemap::config::RenderConfig;
use sales_treemap::render::{self, OutputFormat, Renderer};
use sales_treemap::tree::{self, load::DataSource, load::DEFAULT_DATA_URL};

/// Render the video game sales treemap to a static HTML page or SVG file.
#[derive(Debug, Parser)]
#[command(name = "sales-treemap", version, about)]
struct Cli {
    /// Dataset URL or local JSON file
    #[arg(long, default_value = DEFAULT_DATA_URL)]
    source: String,

    /// Output file (stdout when omitted)
    #[arg(long, short)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// TOML file with render settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the category color order (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// TrueType/OpenType font used to measure tile labels
    #[arg(long)]
    font: Option<PathBuf>,

    /// Treemap width in px
    #[arg(long)]
    width: Option<f64>,

    /// Treemap height in px
    #[arg(long)]
    height: Option<f64>,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for the document.
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sales_treemap=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }

    let source = DataSource::parse(&cli.source);
    tracing::info!("sales-treemap starting, source: {}", source);
    let dataset = tree::load_dataset(&source)
        .with_context(|| format!("failed to load dataset from {}", source))?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let measure = render::select_measure(&config, cli.font.as_deref());
    let renderer = Renderer::new(config, measure, &dataset.categories, &mut rng);
    let document = renderer.render(&dataset.tree, cli.format);

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Wrote {} bytes to {}", document.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
