use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_number;

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    // olmOCR 2 (Allen AI 7B) as published on Ollama
    "richardyoung/olmocr2:7b-q8".to_string()
}

fn default_prompt() -> String {
    "Extract and return all text from this image. Preserve line breaks and reading order. \
     Output only the extracted text."
        .to_string()
}

fn default_timeout_seconds() -> u64 {
    120
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl OllamaConfig {
    pub fn new() -> Self {
        let base_url = env::var("OLLAMA_URL").unwrap_or_else(|_| default_base_url());
        let model = env::var("OCR_MODEL").unwrap_or_else(|_| default_model());
        let timeout_seconds =
            env_number("OCR_TIMEOUT_SECONDS").unwrap_or_else(default_timeout_seconds);

        Self {
            base_url,
            model,
            prompt: default_prompt(),
            timeout_seconds,
        }
    }

    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url.trim_end_matches('/'))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            prompt: default_prompt(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
