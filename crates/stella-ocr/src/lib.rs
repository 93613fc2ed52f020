mod client;
mod error;
mod probe;


pub use client::{GenerateRequest, GenerateResponse, OllamaClient};
pub use error::{OcrError, ProbeError};
pub use probe::{IMAGE_EXTENSIONS, MAX_DEFAULT_IMAGES, recognize_file, resolve_images, run};

/// OCR backend interface
#[async_trait::async_trait]
pub trait OcrProvider: Send + Sync {
    /// Display name of the backend
    fn name(&self) -> &str;

    /// Model identifier sent with every request
    fn model(&self) -> &str;

    /// Extract text from encoded image bytes (PNG, JPEG)
    async fn recognize(&self, image_bytes: &[u8]) -> Result<String, OcrError>;
}
