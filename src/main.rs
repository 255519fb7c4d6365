use anyhow::Result;
use model_header::{config::Config, convert};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Quiet by default; RUST_LOG=debug shows each stage
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_cli()?;
    let summary = convert(&config)?;
    println!("Converted file saved to {}", summary.output.display());

    Ok(())
}
