//! Rasterization and collision layout for the cloud canvas.
//!
//! Words become standalone coverage bitmaps first, then hunt for a free spot
//! along an archimedean spiral from the cloud-region center. Collision is
//! rectangle-based with a small pad so neighboring words do not touch.

use ab_glyph::{Font, FontVec, GlyphId, OutlinedGlyph, PxScale, ScaleFont, point};
use image::{Rgba, RgbaImage};

use super::{CANVAS_HEIGHT, CANVAS_WIDTH, TITLE_BAND};

/// Pixels of clearance kept around every placed word.
const COLLISION_PAD: i32 = 2;

/// Spiral granularity and growth per radian.
const SPIRAL_STEP: f32 = 0.1;
const SPIRAL_GROWTH: f32 = 2.0;

/// Candidate positions tried before a word is given up at this size.
const MAX_SPIRAL_STEPS: usize = 4000;

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width as i32
            && other.x < self.x + self.width as i32
            && self.y < other.y + other.height as i32
            && other.y < self.y + self.height as i32
    }

    fn padded(&self, pad: i32) -> Rect {
        Rect {
            x: self.x - pad,
            y: self.y - pad,
            width: self.width + 2 * pad as u32,
            height: self.height + 2 * pad as u32,
        }
    }

    fn inside_cloud_region(&self) -> bool {
        self.x >= 0
            && self.y >= TITLE_BAND as i32
            && self.x + self.width as i32 <= CANVAS_WIDTH as i32
            && self.y + self.height as i32 <= CANVAS_HEIGHT as i32
    }
}

/// Anti-aliased coverage bitmap of one rendered word.
pub struct WordBitmap {
    pub width: u32,
    pub height: u32,
    coverage: Vec<f32>,
}

impl WordBitmap {
    fn at(&self, x: u32, y: u32) -> f32 {
        self.coverage[(y * self.width + x) as usize]
    }
}

/// Renders a word at the given pixel size into a tight coverage bitmap.
/// Returns `None` when no glyph in the word has an outline.
pub fn rasterize_word(font: &FontVec, size: f32, word: &str) -> Option<WordBitmap> {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);

    let mut glyphs = Vec::new();
    let mut caret = 0.0_f32;
    let mut previous: Option<GlyphId> = None;

    for c in word.chars() {
        let id = font.glyph_id(c);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        glyphs.push(id.with_scale_and_position(scale, point(caret, scaled.ascent())));
        caret += scaled.h_advance(id);
        previous = Some(id);
    }

    let outlined: Vec<OutlinedGlyph> = glyphs
        .into_iter()
        .filter_map(|glyph| font.outline_glyph(glyph))
        .collect();
    if outlined.is_empty() {
        return None;
    }

    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for glyph in &outlined {
        let bounds = glyph.px_bounds();
        min_x = min_x.min(bounds.min.x);
        min_y = min_y.min(bounds.min.y);
        max_x = max_x.max(bounds.max.x);
        max_y = max_y.max(bounds.max.y);
    }

    let width = (max_x - min_x).ceil() as u32 + 1;
    let height = (max_y - min_y).ceil() as u32 + 1;
    let mut coverage = vec![0.0_f32; (width * height) as usize];

    for glyph in &outlined {
        let bounds = glyph.px_bounds();
        let offset_x = (bounds.min.x - min_x) as i32;
        let offset_y = (bounds.min.y - min_y) as i32;

        glyph.draw(|x, y, c| {
            let px = x as i32 + offset_x;
            let py = y as i32 + offset_y;
            if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                let index = (py as u32 * width + px as u32) as usize;
                coverage[index] = coverage[index].max(c);
            }
        });
    }

    Some(WordBitmap {
        width,
        height,
        coverage,
    })
}

/// Walks the spiral looking for the first spot where a `width` x `height`
/// rectangle fits inside the cloud region without touching placed words.
pub fn find_position(
    placed: &[Rect],
    width: u32,
    height: u32,
    start_angle: f32,
) -> Option<Rect> {
    let center_x = CANVAS_WIDTH as f32 / 2.0;
    let center_y = TITLE_BAND as f32 + (CANVAS_HEIGHT - TITLE_BAND) as f32 / 2.0;

    for step in 0..MAX_SPIRAL_STEPS {
        let t = step as f32 * SPIRAL_STEP;
        let radius = SPIRAL_GROWTH * t;
        let angle = t + start_angle;

        let x = center_x + radius * angle.cos() - width as f32 / 2.0;
        let y = center_y + radius * angle.sin() - height as f32 / 2.0;

        let rect = Rect {
            x: x as i32,
            y: y as i32,
            width,
            height,
        };

        if !rect.inside_cloud_region() {
            continue;
        }
        if placed
            .iter()
            .any(|other| rect.padded(COLLISION_PAD).intersects(other))
        {
            continue;
        }

        return Some(rect);
    }

    None
}

/// Blends a word bitmap onto the canvas at `(x, y)`. A rotated blit
/// transposes the bitmap for a quarter-turn counter-clockwise.
pub fn blit(
    image: &mut RgbaImage,
    bitmap: &WordBitmap,
    x: i32,
    y: i32,
    color: Rgba<u8>,
    rotated: bool,
) {
    for by in 0..bitmap.height {
        for bx in 0..bitmap.width {
            let coverage = bitmap.at(bx, by);
            if coverage <= 0.0 {
                continue;
            }

            let (dx, dy) = if rotated {
                (by, bitmap.width - 1 - bx)
            } else {
                (bx, by)
            };

            let px = x + dx as i32;
            let py = y + dy as i32;
            if px < 0 || py < 0 || px >= CANVAS_WIDTH as i32 || py >= CANVAS_HEIGHT as i32 {
                continue;
            }

            let pixel = image.get_pixel_mut(px as u32, py as u32);
            *pixel = blend(*pixel, color, coverage);
        }
    }
}

fn blend(under: Rgba<u8>, over: Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let mix =
        |u: u8, o: u8| -> u8 { (u as f32 * (1.0 - alpha) + o as f32 * alpha).round() as u8 };

    Rgba([
        mix(under[0], over[0]),
        mix(under[1], over[1]),
        mix(under[2], over[2]),
        255,
    ])
}
