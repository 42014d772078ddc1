//! Text measurement and the shared font cache
//!
//! The panel never rasterizes glyphs itself. It asks a [`TextMeasure`] for
//! the local bounds of a string and hands positioned [`crate::surface::TextRun`]s
//! to the surface. [`FontCache`] is the fontdue-backed implementation used by
//! the application; tests substitute a deterministic measurer.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use fontdue::{Font, FontSettings};

use crate::geometry::Vec2;

/// Name under which the fallback font is registered
pub const FALLBACK_FONT: &str = "fallback";

/// Fonts tried, in order, when no explicit fallback font path is configured
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Ink bounds of a rendered string, relative to the string's local origin
/// (left edge of the pen, top of the line box).
///
/// `left`/`top` are the insets from that origin to the first inked pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl LocalBounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }
}

/// Measures strings for layout
pub trait TextMeasure {
    /// Local bounds of `text` set in `font` at `character_size` pixels
    fn measure(&self, text: &str, font: &str, character_size: u32) -> LocalBounds;
}

impl<T: TextMeasure + ?Sized> TextMeasure for Rc<T> {
    fn measure(&self, text: &str, font: &str, character_size: u32) -> LocalBounds {
        (**self).measure(text, font, character_size)
    }
}

/// Ink bounds of `text` in a fontdue font, using the same baseline rule the
/// rasterizer uses (`baseline = line top + ascent`).
pub fn measure_with_font(font: &Font, text: &str, px: f32) -> LocalBounds {
    let ascent = font
        .horizontal_line_metrics(px)
        .map_or(px, |metrics| metrics.ascent);

    let mut pen = 0.0_f32;
    let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
    let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);

    for ch in text.chars() {
        let metrics = font.metrics(ch, px);
        if metrics.width > 0 && metrics.height > 0 {
            let left = pen + metrics.xmin as f32;
            let top = ascent - metrics.height as f32 - metrics.ymin as f32;
            min_x = min_x.min(left);
            min_y = min_y.min(top);
            max_x = max_x.max(left + metrics.width as f32);
            max_y = max_y.max(top + metrics.height as f32);
        }
        pen += metrics.advance_width;
    }

    if min_x > max_x {
        // Nothing inked (empty or whitespace-only)
        return LocalBounds::default();
    }
    LocalBounds::new(min_x, min_y, max_x - min_x, max_y - min_y)
}

/// Name → font mapping shared between the panel (measuring) and the canvas
/// (rasterizing).
///
/// Populated with the fallback font at construction and read-mostly after
/// that. Lookups of unknown names resolve to the fallback font.
#[derive(Default)]
pub struct FontCache {
    fonts: RefCell<HashMap<String, Rc<Font>>>,
}

impl FontCache {
    /// A cache with no fonts at all; every measurement is empty
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the fallback font from `path`, or from the first readable
    /// system font when no path is given.
    ///
    /// Failure is logged and otherwise ignored: the cache stays usable but
    /// text measures as empty and is not drawn.
    pub fn with_fallback_file(path: Option<&Path>) -> Self {
        let cache = Self::empty();
        let candidates: Vec<PathBuf> = match path {
            Some(path) => vec![path.to_path_buf()],
            None => SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
        };

        for candidate in &candidates {
            match cache.load_font_file(FALLBACK_FONT, candidate) {
                Ok(()) => {
                    tracing::info!("Loaded fallback font from {}", candidate.display());
                    return cache;
                }
                Err(e) => tracing::debug!("{}", e),
            }
        }

        tracing::error!(
            "Error loading fallback font (tried {} location(s)); text will not render",
            candidates.len()
        );
        cache
    }

    /// A cache whose fallback font is parsed from `bytes`
    pub fn with_fallback_bytes(bytes: &[u8]) -> Result<Self, String> {
        let cache = Self::empty();
        cache.load_font(FALLBACK_FONT, bytes)?;
        Ok(cache)
    }

    /// Parse and register a font under `name`, replacing any previous one
    pub fn load_font(&self, name: &str, bytes: &[u8]) -> Result<(), String> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| format!("Failed to parse font '{}': {}", name, e))?;
        self.fonts
            .borrow_mut()
            .insert(name.to_string(), Rc::new(font));
        Ok(())
    }

    /// Read a font file and register it under `name`
    pub fn load_font_file(&self, name: &str, path: &Path) -> Result<(), String> {
        let bytes = std::fs::read(path)
            .map_err(|e| format!("Failed to read font file {}: {}", path.display(), e))?;
        self.load_font(name, &bytes)
    }

    /// Font registered under `name`, or the fallback font
    pub fn get(&self, name: &str) -> Option<Rc<Font>> {
        let fonts = self.fonts.borrow();
        fonts
            .get(name)
            .or_else(|| fonts.get(FALLBACK_FONT))
            .cloned()
    }

    /// Whether `name` is registered (ignoring the fallback)
    pub fn contains(&self, name: &str) -> bool {
        self.fonts.borrow().contains_key(name)
    }

    pub fn has_fallback(&self) -> bool {
        self.contains(FALLBACK_FONT)
    }

    pub fn len(&self) -> usize {
        self.fonts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.borrow().is_empty()
    }
}

impl TextMeasure for FontCache {
    fn measure(&self, text: &str, font: &str, character_size: u32) -> LocalBounds {
        match self.get(font) {
            Some(font) => measure_with_font(&font, text, character_size as f32),
            None => {
                tracing::trace!("No font available to measure {:?}", text);
                LocalBounds::default()
            }
        }
    }
}
