use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::env_number;

pub const SAMPLE_FILE_NAME: &str = "sample_printed.png";

fn default_font_size() -> f32 {
    18.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Preferred TrueType font, tried before the system candidates
    pub font_path: Option<PathBuf>,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

impl SampleConfig {
    pub fn new() -> Self {
        let font_path = env::var("SAMPLE_FONT_PATH").ok().map(PathBuf::from);
        let font_size = env_number("SAMPLE_FONT_SIZE").unwrap_or_else(default_font_size);

        Self {
            font_path,
            font_size,
        }
    }

    pub fn output_path(&self, samples_dir: &Path) -> PathBuf {
        samples_dir.join(SAMPLE_FILE_NAME)
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            font_path: None,
            font_size: default_font_size(),
        }
    }
}
