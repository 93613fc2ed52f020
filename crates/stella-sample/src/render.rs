use ab_glyph::{Font, PxScale, ScaleFont};
use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;

use crate::SampleFont;

pub const SAMPLE_TEXT: &str = "Stella OCR Test
Printed line 1
Printed line 2
Phase 0 olmOCR 2 validation.";

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Smallest bitmap cell, one source pixel per output pixel
const BITMAP_GLYPH: u32 = 8;

#[derive(Debug, Clone)]
pub struct SampleSpec {
    pub text: String,
    pub width: u32,
    pub height: u32,
    /// Top-left corner of the first line
    pub origin: (i32, i32),
    pub font_size: f32,
}

impl Default for SampleSpec {
    fn default() -> Self {
        Self {
            text: SAMPLE_TEXT.to_string(),
            width: 400,
            height: 120,
            origin: (20, 20),
            font_size: 18.0,
        }
    }
}

/// Black text on a white canvas, one drawn line per text line
pub fn render(spec: &SampleSpec, font: &SampleFont) -> RgbImage {
    let mut image = RgbImage::from_pixel(spec.width, spec.height, WHITE);
    let text = spec.text.trim();

    match font {
        SampleFont::TrueType { font, .. } => draw_truetype(&mut image, spec, font, text),
        SampleFont::Bitmap => draw_bitmap(&mut image, spec, text),
    }

    image
}

fn draw_truetype<F: Font>(image: &mut RgbImage, spec: &SampleSpec, font: &F, text: &str) {
    let scale = PxScale::from(spec.font_size);
    let scaled = font.as_scaled(scale);
    let line_height = (scaled.height() + scaled.line_gap()).ceil() as i32;
    let (x, y) = spec.origin;

    for (i, line) in text.lines().enumerate() {
        draw_text_mut(image, BLACK, x, y + i as i32 * line_height, scale, font, line);
    }
}

/// Nearest-neighbour scaled 8x8 glyphs, sized to fit the canvas
fn draw_bitmap(image: &mut RgbImage, spec: &SampleSpec, text: &str) {
    let (x0, y0) = (spec.origin.0.max(0) as u32, spec.origin.1.max(0) as u32);
    let cell = bitmap_cell(spec, text, x0, y0);
    let advance = cell + cell / 4;

    for (row, line) in text.lines().enumerate() {
        let top = y0 + row as u32 * advance;

        for (col, ch) in line.chars().enumerate() {
            let Some(glyph) = BASIC_FONTS.get(ch) else {
                continue;
            };
            let left = x0 + col as u32 * cell;

            for py in 0..cell {
                let bits = glyph[(py * BITMAP_GLYPH / cell) as usize];
                for px in 0..cell {
                    if bits & (1 << (px * BITMAP_GLYPH / cell)) == 0 {
                        continue;
                    }
                    let (x, y) = (left + px, top + py);
                    if x < image.width() && y < image.height() {
                        image.put_pixel(x, y, BLACK);
                    }
                }
            }
        }
    }
}

fn bitmap_cell(spec: &SampleSpec, text: &str, x0: u32, y0: u32) -> u32 {
    let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(1).max(1) as u32;
    let lines = text.lines().count().max(1) as u32;

    let by_width = spec.width.saturating_sub(2 * x0) / longest;
    // advance is cell * 5/4
    let by_height = spec.height.saturating_sub(y0) * 4 / (lines * 5);

    (spec.font_size as u32)
        .min(by_width)
        .min(by_height)
        .max(BITMAP_GLYPH)
}
