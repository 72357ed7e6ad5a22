//! # Word Cloud Rendering Module
//!
//! Turns a lyric corpus into a frequency-weighted word cloud image.
//!
//! ## Pipeline
//!
//! ```text
//! corpus text
//!     │  tokenize, trim punctuation, normalize, drop stop words
//!     ▼
//! word frequencies (descending, capped)
//!     │  scale font size by relative frequency
//!     ▼
//! rasterized word bitmaps
//!     │  spiral placement with rectangle collision
//!     ▼
//! RGBA canvas (title band + cloud region)
//! ```
//!
//! ## Determinism
//!
//! Layout runs from a fixed-seed generator and frequencies are sorted with a
//! total order (count, then word), so identical corpus text renders a
//! pixel-identical image on every run. Rotation, color choice and spiral
//! start angles all draw from the same seeded generator.
//!
//! ## Fonts
//!
//! Glyphs come from a single TTF discovered on the host, which must cover
//! both Latin and Greek. The `WORDIFY_FONT` environment variable overrides
//! discovery; otherwise a list of common distribution paths is probed in
//! order. Words the font cannot outline are skipped rather than drawn as
//! tofu boxes.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::PathBuf;

use ab_glyph::FontVec;
use image::{Rgba, RgbaImage};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    config,
    language::{self, Language},
};

pub mod layout;

pub const CANVAS_WIDTH: u32 = 1600;
pub const CANVAS_HEIGHT: u32 = 900;

/// Horizontal band at the top reserved for the title.
pub const TITLE_BAND: u32 = 100;

const MIN_FONT: f32 = 10.0;
const MAX_FONT: f32 = 150.0;
const TITLE_FONT: f32 = 40.0;
const TITLE_MARGIN: u32 = 20;

/// Most frequent words drawn per cloud.
const MAX_WORDS: usize = 200;

/// Share of words drawn rotated a quarter-turn.
const ROTATE_SHARE: f64 = 0.1;

const LAYOUT_SEED: u64 = 42;

const TITLE_COLOR: Rgba<u8> = Rgba([20, 20, 20, 255]);

const PALETTE: [Rgba<u8>; 8] = [
    Rgba([31, 119, 180, 255]),
    Rgba([255, 127, 14, 255]),
    Rgba([44, 160, 44, 255]),
    Rgba([214, 39, 40, 255]),
    Rgba([148, 103, 189, 255]),
    Rgba([140, 86, 75, 255]),
    Rgba([227, 119, 194, 255]),
    Rgba([23, 190, 207, 255]),
];

/// Locations probed for a Unicode-capable font, in order.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

#[derive(Debug)]
pub enum RenderError {
    NoFont,
    FontParse,
    NoWords,
    IoError(std::io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::NoFont => {
                write!(
                    f,
                    "no usable font found (set WORDIFY_FONT to a TTF file that covers Latin and Greek)"
                )
            }
            RenderError::FontParse => write!(f, "font file could not be parsed"),
            RenderError::NoWords => {
                write!(f, "no words left to draw after stop-word filtering")
            }
            RenderError::IoError(err) => write!(f, "{}", err),
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::IoError(err)
    }
}

/// Finds a usable font file: the configured override first, then the
/// candidate list.
pub fn find_font() -> Option<PathBuf> {
    if let Some(path) = config::font_path() {
        let path = PathBuf::from(path);
        if path.is_file() {
            return Some(path);
        }
    }

    FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

/// Reads and parses the discovered font.
pub async fn load_font() -> Result<FontVec, RenderError> {
    let path = find_font().ok_or(RenderError::NoFont)?;
    let bytes = async_fs::read(&path).await?;

    FontVec::try_from_vec(bytes).map_err(|_| RenderError::FontParse)
}

/// Counts normalized, stop-word-filtered token frequencies.
///
/// Tokens are whitespace-delimited with surrounding punctuation trimmed;
/// single characters and pure numbers are dropped. The result is sorted by
/// descending count with ties broken alphabetically, capped to the most
/// frequent 200 words.
pub fn word_frequencies(
    text: &str,
    language: Language,
    stops: &HashSet<String>,
) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for token in text.split_whitespace() {
        let trimmed = token.trim_matches(|c: char| !c.is_alphanumeric());
        if trimmed.chars().count() < 2 {
            continue;
        }
        if trimmed.chars().all(char::is_numeric) {
            continue;
        }

        let word = if language.includes_greek() {
            language::normalize_word(trimmed)
        } else {
            trimmed.to_lowercase()
        };

        if stops.contains(&word) {
            continue;
        }

        *counts.entry(word).or_insert(0) += 1;
    }

    let mut frequencies: Vec<(String, usize)> = counts.into_iter().collect();
    frequencies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    frequencies.truncate(MAX_WORDS);

    frequencies
}

/// Renders the word cloud for a corpus.
///
/// Font size scales with the square root of relative frequency between the
/// size bounds. A word that finds no free spot is retried 10% smaller until
/// it either fits or falls below the minimum size and is dropped.
///
/// # Arguments
/// * `font` - Parsed font used for every glyph on the canvas.
/// * `text` - Language-filtered corpus.
/// * `title` - Caption drawn centered in the title band.
/// * `language` - Language mode; controls normalization and stop words.
pub fn render_image(
    font: &FontVec,
    text: &str,
    title: &str,
    language: Language,
) -> Result<RgbaImage, RenderError> {
    let stops = language::stop_word_set(language);
    let frequencies = word_frequencies(text, language, &stops);
    if frequencies.is_empty() {
        return Err(RenderError::NoWords);
    }

    let mut image = RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, Rgba([255, 255, 255, 255]));
    let mut rng = StdRng::seed_from_u64(LAYOUT_SEED);
    let mut placed: Vec<layout::Rect> = Vec::new();

    let max_count = frequencies[0].1 as f32;

    for (word, count) in &frequencies {
        let relative = *count as f32 / max_count;
        let mut size = MIN_FONT + (MAX_FONT - MIN_FONT) * relative.sqrt();

        let rotated = rng.random_bool(ROTATE_SHARE);
        let color = PALETTE[rng.random_range(0..PALETTE.len())];
        let start_angle = rng.random_range(0.0..std::f32::consts::TAU);

        while size >= MIN_FONT {
            let bitmap = match layout::rasterize_word(font, size, word) {
                Some(bitmap) => bitmap,
                None => break,
            };

            let (width, height) = if rotated {
                (bitmap.height, bitmap.width)
            } else {
                (bitmap.width, bitmap.height)
            };

            if let Some(rect) = layout::find_position(&placed, width, height, start_angle) {
                layout::blit(&mut image, &bitmap, rect.x, rect.y, color, rotated);
                placed.push(rect);
                break;
            }

            // No room at this size; retry smaller.
            size *= 0.9;
        }
    }

    draw_title(&mut image, font, title);

    Ok(image)
}

/// Draws the caption centered in the title band, shrinking it until it fits
/// the canvas width.
fn draw_title(image: &mut RgbaImage, font: &FontVec, title: &str) {
    let mut size = TITLE_FONT;

    loop {
        let bitmap = match layout::rasterize_word(font, size, title) {
            Some(bitmap) => bitmap,
            None => return,
        };

        if bitmap.width + 2 * TITLE_MARGIN <= CANVAS_WIDTH || size <= MIN_FONT {
            let x = (CANVAS_WIDTH.saturating_sub(bitmap.width) / 2) as i32;
            let y = (TITLE_BAND.saturating_sub(bitmap.height) / 2) as i32;
            layout::blit(image, &bitmap, x, y, TITLE_COLOR, false);
            return;
        }

        size *= 0.9;
    }
}
