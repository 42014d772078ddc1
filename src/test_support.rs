//! Helpers shared by the unit tests

use crate::text::{LocalBounds, TextMeasure};

/// Every character is 10px wide; ink fills the character size
#[derive(Debug, Clone, Copy, Default)]
pub struct Monospace;

impl TextMeasure for Monospace {
    fn measure(&self, text: &str, _font: &str, size: u32) -> LocalBounds {
        LocalBounds::new(0.0, 0.0, text.chars().count() as f32 * 10.0, size as f32)
    }
}
