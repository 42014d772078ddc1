//! Software rendering of panels into a pixel buffer
//!
//! [`Canvas`] implements [`Surface`] on top of a [`Frame`], rasterizing
//! text with fonts from the shared [`FontCache`].

pub mod frame;

pub use frame::{Frame, TextPainter};

use std::collections::HashMap;

use fontdue::Metrics;

use crate::geometry::{Rect, Vec2};
use crate::surface::{Surface, TextRun};
use crate::text::FontCache;
use crate::theme::Color;

pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Rasterized glyphs per font name. Lives across frames.
#[derive(Default)]
pub struct GlyphCaches {
    by_font: HashMap<String, GlyphCache>,
}

impl GlyphCaches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_font(&mut self, font: &str) -> &mut GlyphCache {
        self.by_font.entry(font.to_string()).or_default()
    }

    /// Total number of cached glyphs across fonts
    pub fn len(&self) -> usize {
        self.by_font.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.by_font.clear();
    }
}

/// A frame plus what is needed to draw text onto it
pub struct Canvas<'a, 'b> {
    frame: &'a mut Frame<'b>,
    fonts: &'a FontCache,
    glyphs: &'a mut GlyphCaches,
}

impl<'a, 'b> Canvas<'a, 'b> {
    pub fn new(frame: &'a mut Frame<'b>, fonts: &'a FontCache, glyphs: &'a mut GlyphCaches) -> Self {
        Self {
            frame,
            fonts,
            glyphs,
        }
    }
}

impl Surface for Canvas<'_, '_> {
    fn size(&self) -> (u32, u32) {
        (self.frame.width() as u32, self.frame.height() as u32)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.frame.fill_rect_blended(rect, color.to_argb_u32());
    }

    fn outline_rect(&mut self, rect: Rect, thickness: f32, color: Color) {
        self.frame.stroke_rect(rect, thickness, color.to_argb_u32());
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.frame.fill_polygon(points, color.to_argb_u32());
    }

    fn outline_polygon(&mut self, points: &[Vec2], color: Color) {
        self.frame.stroke_polygon(points, color.to_argb_u32());
    }

    fn draw_text(&mut self, run: &TextRun<'_>) {
        let Some(font) = self.fonts.get(run.font) else {
            tracing::trace!("Skipping text {:?}: no font loaded", run.text);
            return;
        };

        let glyph_cache = self.glyphs.for_font(run.font);
        let mut painter = TextPainter::new(&font, glyph_cache, run.character_size as f32);
        painter.draw(
            self.frame,
            run.position.x,
            run.position.y,
            run.text,
            run.color.to_argb_u32(),
        );
    }
}
