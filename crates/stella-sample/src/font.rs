use std::path::{Path, PathBuf};

use ab_glyph::FontVec;

/// Well-known font files tried after the configured one
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/Library/Fonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    r"C:\Windows\Fonts\arial.ttf",
];

pub enum SampleFont {
    TrueType { font: FontVec, path: PathBuf },
    /// Built-in 8x8 bitmap glyphs
    Bitmap,
}

impl SampleFont {
    pub fn describe(&self) -> String {
        match self {
            SampleFont::TrueType { path, .. } => path.display().to_string(),
            SampleFont::Bitmap => "built-in bitmap".to_string(),
        }
    }
}

/// Preferred font first, then the system candidates
pub fn font_candidates(preferred: Option<&Path>) -> Vec<PathBuf> {
    preferred
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from))
        .collect()
}

/// First candidate that parses as a font, or the bitmap fallback
pub fn load_font(candidates: &[PathBuf]) -> SampleFont {
    for path in candidates {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!("Font {} unavailable: {e}", path.display());
                continue;
            }
        };

        match FontVec::try_from_vec(bytes) {
            Ok(font) => {
                tracing::debug!("Using font {}", path.display());
                return SampleFont::TrueType {
                    font,
                    path: path.clone(),
                };
            }
            Err(e) => tracing::debug!("Font {} is not usable: {e}", path.display()),
        }
    }

    tracing::info!("No TrueType font found, falling back to built-in bitmap font");
    SampleFont::Bitmap
}
