use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::ollama::OllamaConfig;
use self::sample::SampleConfig;

pub mod ollama;
pub mod sample;

/// `<workspace root>/samples`, fixed at build time so both tools agree on it
/// regardless of the launch directory
pub fn default_samples_dir() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .nth(2)
        .unwrap_or(manifest_dir)
        .join("samples")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ollama: OllamaConfig,
    pub sample: SampleConfig,

    /// Directory the generator writes into and the probe reads from
    #[serde(default = "default_samples_dir")]
    pub samples_dir: PathBuf,
}

impl Config {
    pub fn new() -> Self {
        let samples_dir = env::var("OCR_SAMPLES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_samples_dir());

        Config {
            ollama: OllamaConfig::new(),
            sample: SampleConfig::new(),
            samples_dir,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ollama: OllamaConfig::default(),
            sample: SampleConfig::default(),
            samples_dir: default_samples_dir(),
        }
    }
}

/// Parse a numeric env var, ignoring values that don't parse
pub(crate) fn env_number<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
