mod font;
mod render;

pub use font::{SYSTEM_FONT_CANDIDATES, SampleFont, font_candidates, load_font};
pub use render::{SAMPLE_TEXT, SampleSpec, render};

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use stella_config::Config;

/// Render the sample image and write it to `<samples_dir>/sample_printed.png`
pub fn generate(config: &Config) -> Result<PathBuf> {
    let output = config.sample.output_path(&config.samples_dir);

    fs::create_dir_all(&config.samples_dir).with_context(|| {
        format!(
            "Failed to create samples directory {}",
            config.samples_dir.display()
        )
    })?;

    let font = load_font(&font_candidates(config.sample.font_path.as_deref()));
    let spec = SampleSpec {
        font_size: config.sample.font_size,
        ..SampleSpec::default()
    };

    render(&spec, &font)
        .save(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!("Wrote sample image with {} font", font.describe());
    Ok(output)
}
