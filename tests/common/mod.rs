//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use dockmenu::geometry::{Rect, Vec2};
use dockmenu::panel::{Panel, PanelType};
use dockmenu::surface::{Surface, TextRun};
use dockmenu::text::{LocalBounds, TextMeasure};
use dockmenu::theme::Color;

pub const SURFACE_WIDTH: f32 = 800.0;
pub const SURFACE_HEIGHT: f32 = 600.0;

/// Advance of every character
pub const CHAR_WIDTH: f32 = 10.0;

/// Deterministic measurer: `CHAR_WIDTH` per character, ink as tall as the
/// character size, no insets
#[derive(Debug, Clone, Copy, Default)]
pub struct Monospace;

impl TextMeasure for Monospace {
    fn measure(&self, text: &str, _font: &str, character_size: u32) -> LocalBounds {
        LocalBounds::new(
            0.0,
            0.0,
            text.chars().count() as f32 * CHAR_WIDTH,
            character_size as f32,
        )
    }
}

/// Panel laid out against an 800x600 surface
pub fn test_panel(panel_type: PanelType) -> Panel<Monospace> {
    Panel::new(panel_type, Monospace).with_surface_size(SURFACE_WIDTH, SURFACE_HEIGHT)
}

/// Panel with `texts` added in order
pub fn panel_with_items(panel_type: PanelType, texts: &[&str]) -> Panel<Monospace> {
    let mut panel = test_panel(panel_type);
    for text in texts {
        panel.add_item(text).unwrap();
    }
    panel
}

/// Item positions in display order
pub fn positions(panel: &Panel<Monospace>) -> Vec<Vec2> {
    panel.items().iter().map(|item| item.position()).collect()
}

/// Item texts in display order
pub fn texts(panel: &Panel<Monospace>) -> Vec<String> {
    panel
        .items()
        .iter()
        .map(|item| item.text().to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillRect(Rect, Color),
    OutlineRect(Rect, Color),
    FillPolygon(usize, Color),
    OutlinePolygon(usize, Color),
    Text { text: String, position: Vec2 },
}

/// Surface that records every submission
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn texts(&self) -> Vec<(String, Vec2)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, position } => Some((text.clone(), *position)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::FillRect(rect, color));
    }

    fn outline_rect(&mut self, rect: Rect, _thickness: f32, color: Color) {
        self.calls.push(DrawCall::OutlineRect(rect, color));
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.calls.push(DrawCall::FillPolygon(points.len(), color));
    }

    fn outline_polygon(&mut self, points: &[Vec2], color: Color) {
        self.calls.push(DrawCall::OutlinePolygon(points.len(), color));
    }

    fn draw_text(&mut self, run: &TextRun<'_>) {
        self.calls.push(DrawCall::Text {
            text: run.text.to_string(),
            position: run.position,
        });
    }
}
