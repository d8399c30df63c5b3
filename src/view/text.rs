//! Text painting
//!
//! Glyphs are rasterized with fontdue from a configured font file, or from the
//! first monospace system font found. Without any font, text is drawn as bars
//! whose length follows the text they stand for.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings, Metrics};

use devbyte::resizable::Rect;

use super::frame::Frame;
use super::{CHAR_WIDTH, TEXT_BAR_HEIGHT};

/// Font size in logical pixels
const BASE_FONT_SIZE: f32 = 12.0;

/// Monospace fonts tried when no font path is configured
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Monaco.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
    "C:\\Windows\\Fonts\\cour.ttf",
];

/// Rasterized glyphs keyed by character, for the current font size
pub type GlyphCache = HashMap<char, (Metrics, Vec<u8>)>;

pub struct TextPainter {
    font: Option<Font>,
    font_size: f32,
    ascent: f32,
    glyph_cache: GlyphCache,
}

impl TextPainter {
    /// Painter that only draws bars
    pub fn bars() -> Self {
        Self {
            font: None,
            font_size: BASE_FONT_SIZE,
            ascent: 0.0,
            glyph_cache: GlyphCache::new(),
        }
    }

    /// Load `font_path` if given, otherwise the first system font present.
    /// Falls back to bars when nothing loads.
    pub fn load(font_path: Option<&Path>) -> Self {
        let font = match font_path {
            Some(path) => load_font_file(path),
            None => SYSTEM_FONTS
                .iter()
                .map(PathBuf::from)
                .filter(|path| path.exists())
                .find_map(|path| load_font_file(&path)),
        };
        let mut painter = Self {
            font,
            ..Self::bars()
        };
        if !painter.has_font() {
            tracing::info!("No usable font found, drawing text as bars");
        }
        painter.set_scale(1.0);
        painter
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Follow a display scale change; drops glyphs rasterized at the old size
    pub fn set_scale(&mut self, scale: f64) {
        let font_size = BASE_FONT_SIZE * scale as f32;
        if (font_size - self.font_size).abs() < f32::EPSILON && self.ascent > 0.0 {
            return;
        }
        self.font_size = font_size;
        self.glyph_cache.clear();
        self.ascent = self
            .font
            .as_ref()
            .and_then(|font| font.horizontal_line_metrics(font_size))
            .map_or(font_size * 0.8, |metrics| metrics.ascent);
    }

    /// Draw `text` with its top edge at `y`, cut off after `max_width`
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &mut self,
        frame: &mut Frame,
        x: f64,
        y: f64,
        text: &str,
        max_width: f64,
        color: u32,
        s: f64,
    ) {
        if text.is_empty() || max_width <= 0.0 {
            return;
        }
        let Some(font) = self.font.as_ref() else {
            return draw_bar(frame, x, y, text.chars().count(), max_width, color, s);
        };

        let font_size = self.font_size;
        let limit = (x + max_width) as f32;
        let baseline = y as f32 + self.ascent;
        let mut pen_x = x as f32;
        for ch in text.chars() {
            let (metrics, bitmap) = self
                .glyph_cache
                .entry(ch)
                .or_insert_with(|| font.rasterize(ch, font_size));
            if pen_x + metrics.advance_width > limit {
                break;
            }

            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;
            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let alpha = bitmap[row * metrics.width + col];
                    if alpha == 0 {
                        continue;
                    }
                    let px = pen_x as isize + col as isize + metrics.xmin as isize;
                    let py = (glyph_top + row as f32) as isize;
                    frame.blend_pixel(px, py, color, alpha as f32 / 255.0);
                }
            }
            pen_x += metrics.advance_width;
        }
    }
}

fn load_font_file(path: &Path) -> Option<Font> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Failed to read font {}: {}", path.display(), e);
            return None;
        }
    };
    match Font::from_bytes(bytes, FontSettings::default()) {
        Ok(font) => {
            tracing::debug!("Loaded font from {}", path.display());
            Some(font)
        }
        Err(e) => {
            tracing::warn!("Failed to parse font {}: {}", path.display(), e);
            None
        }
    }
}

/// A bar standing in for `chars` characters of text, capped at `max_width`
fn draw_bar(frame: &mut Frame, x: f64, y: f64, chars: usize, max_width: f64, color: u32, s: f64) {
    let width = (chars as f64 * CHAR_WIDTH * s).min(max_width);
    if width <= 0.0 {
        return;
    }
    frame.fill_rect_blended(
        Rect::new(x, y, width, TEXT_BAR_HEIGHT * s),
        (color & 0x00FFFFFF) | 0xB0000000,
    );
}
