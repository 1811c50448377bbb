use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flood_matte::{Connectivity, Tolerance};
use logo_knockout::models::AppConfig;
use logo_knockout::services::{BackgroundExtractor, ExtractReport};

#[derive(Parser)]
#[command(name = "logo-knockout")]
#[command(version)]
#[command(about = "Make the near-black backdrop of a logo transparent")]
struct Cli {
    /// Input image (any format the decoder supports, e.g. JPEG or PNG)
    #[arg(requires = "output")]
    input: Option<PathBuf>,

    /// Output PNG path
    output: Option<PathBuf>,

    /// Channels strictly below this value count as near-black (0-255)
    #[arg(short, long)]
    tolerance: Option<u8>,

    /// Neighbourhood for the fill: 4 (default) or 8
    #[arg(short, long)]
    connectivity: Option<Connectivity>,

    /// Recompress the output with oxipng
    #[arg(long)]
    optimize: bool,

    /// YAML config file
    #[arg(long, env = "KNOCKOUT_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "logo_knockout=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let result = run(cli);
    if let Err(e) = &result {
        tracing::debug!(error = ?e, "Background removal failed");
    }

    // Failures are reported, not propagated: the process still ends normally.
    match status_line(&result) {
        Ok(line) => println!("{line}"),
        Err(line) => eprintln!("{line}"),
    }
    Ok(())
}

/// Merge config and flags into an extractor plus the input and output paths
fn plan(cli: Cli) -> anyhow::Result<(BackgroundExtractor, PathBuf, PathBuf)> {
    let config = match cli.config.as_deref() {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    let (input, output) = config.resolve_paths(cli.input, cli.output)?;

    let mut options = config.fill_options()?;
    if let Some(t) = cli.tolerance {
        options = options.tolerance(Tolerance::new(t));
    }
    if let Some(c) = cli.connectivity {
        options = options.connectivity(c);
    }

    let extractor = BackgroundExtractor::new(options).optimize(cli.optimize || config.optimize);
    Ok((extractor, input, output))
}

fn run(cli: Cli) -> anyhow::Result<ExtractReport> {
    let (extractor, input, output) = plan(cli)?;
    Ok(extractor.extract(&input, &output)?)
}

/// The line shown to the user: `Ok` for stdout, `Err` for stderr
fn status_line(result: &anyhow::Result<ExtractReport>) -> Result<String, String> {
    match result {
        Ok(report) => Ok(format!(
            "Successfully saved transparent image to {}",
            report.output.display()
        )),
        Err(e) => Err(format!("Error processing image: {e}")),
    }
}
