//! Create the printed-text sample used by the OCR probe.
//!
//! Run with: cargo run -p stella-sample --bin make_sample

use std::path::PathBuf;

use clap::Parser;
use stella_config::Config;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "make_sample", about = "Render a printed-text sample image for OCR testing")]
struct Args {
    /// TrueType font to render with, tried before the system fonts
    #[arg(long)]
    font: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = Config::new();
    if args.font.is_some() {
        config.sample.font_path = args.font;
    }

    let path = stella_sample::generate(&config)?;
    println!("Created {}", path.display());
    Ok(())
}
