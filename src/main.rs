use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use salary_proration::cli::{self, Cli};
use salary_proration::config::{ConfigLoader, LogFormat, LoggingConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loader = match &cli.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ConfigLoader::default(),
    };

    init_tracing(loader.logging());

    let outcome = cli::execute(&cli.command, loader.config())?;
    let rendered = outcome
        .render(cli.format, loader.display())
        .context("Failed to render output")?;

    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` overrides the configured filter.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
