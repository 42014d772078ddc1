//! The render surface a panel draws onto
//!
//! Implemented by [`crate::view::Canvas`] for the softbuffer window and by
//! recording surfaces in tests.

use crate::geometry::{Rect, Vec2};
use crate::theme::Color;

/// A positioned run of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRun<'a> {
    pub text: &'a str,
    /// Font name, resolved through the font cache
    pub font: &'a str,
    pub character_size: u32,
    /// Surface position of the run's local origin (pen start, top of line)
    pub position: Vec2,
    pub color: Color,
}

pub trait Surface {
    /// Current size in pixels (width, height)
    fn size(&self) -> (u32, u32);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a border of `thickness` pixels just inside `rect`
    fn outline_rect(&mut self, rect: Rect, thickness: f32, color: Color);

    /// Fill a closed polygon (even-odd rule)
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);

    /// Stroke a closed polygon with 1px lines
    fn outline_polygon(&mut self, points: &[Vec2], color: Color);

    fn draw_text(&mut self, run: &TextRun<'_>);
}
