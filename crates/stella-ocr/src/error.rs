use std::path::PathBuf;

/// Per-image failure. `Display` is the text printed in place of the OCR result.
#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("[Error: Ollama not reachable at {url}. Start with: ollama serve] {source}")]
    Unreachable {
        url: String,
        source: reqwest::Error,
    },

    #[error("[Error: request to {url} timed out after {seconds}s]")]
    Timeout { url: String, seconds: u64 },

    #[error("[HTTP Error {status}: {body}]")]
    Http { status: u16, body: String },

    #[error("[Invalid JSON from Ollama: {0}]")]
    InvalidJson(#[from] serde_json::Error),

    /// Error reported by the service itself, surfaced verbatim
    #[error("{0}")]
    Service(String),

    #[error("[Error: could not read {}: {source}]", .path.display())]
    ReadImage {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("[Error: failed to build HTTP client] {0}")]
    Client(#[source] reqwest::Error),
}

/// Input resolution failures, reported before any request is made
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error(
        "No images given and no samples in {dir}/.\n\
         Usage: run_ocr_test [image1.png] [image2.png]\n\
         Or add PNG/JPEG files to {dir}/ and run again.",
        dir = .samples_dir.display()
    )]
    NoImages { samples_dir: PathBuf },

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
}
