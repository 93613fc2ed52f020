use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{OcrError, OcrProvider, ProbeError};

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// How many images are picked from the samples directory when none are given
pub const MAX_DEFAULT_IMAGES: usize = 2;

/// Resolve the images to send: explicit arguments, otherwise the first
/// images (by name) in `samples_dir`.
pub fn resolve_images(args: &[PathBuf], samples_dir: &Path) -> Result<Vec<PathBuf>, ProbeError> {
    let paths = if args.is_empty() {
        default_samples(samples_dir)
    } else {
        args.to_vec()
    };

    if paths.is_empty() {
        return Err(ProbeError::NoImages {
            samples_dir: samples_dir.to_path_buf(),
        });
    }

    if let Some(missing) = paths.iter().find(|p| !p.exists()) {
        return Err(ProbeError::FileNotFound(missing.clone()));
    }

    Ok(paths)
}

fn default_samples(samples_dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(samples_dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("Cannot read samples dir {}: {e}", samples_dir.display());
            return Vec::new();
        }
    };

    let mut images: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_image(path))
        .collect();

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    images.truncate(MAX_DEFAULT_IMAGES);
    images
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

/// Run OCR on one file. Failures come back as the text to print.
pub async fn recognize_file<P>(provider: &P, path: &Path) -> String
where
    P: OcrProvider + ?Sized,
{
    let result = match tokio::fs::read(path).await {
        Ok(bytes) => provider.recognize(&bytes).await,
        Err(source) => Err(OcrError::ReadImage {
            path: path.to_path_buf(),
            source,
        }),
    };

    match result {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!("OCR failed for {}: {e}", path.display());
            e.to_string()
        }
    }
}

/// Process every image in order, writing a labelled block per image
pub async fn run<P, W>(provider: &P, paths: &[PathBuf], out: &mut W) -> std::io::Result<()>
where
    P: OcrProvider + ?Sized,
    W: Write,
{
    writeln!(out, "Stella OCR test via {}", provider.name())?;
    writeln!(out, "Model: {}", provider.model())?;
    writeln!(out, "Images: {:?}", paths)?;
    writeln!(out, "{}", "-".repeat(60))?;

    for path in paths {
        let text = recognize_file(provider, path).await;
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        writeln!(out, "\n--- {label} ---\n{text}\n")?;
        out.flush()?;
    }

    writeln!(out, "Done.")?;
    Ok(())
}
