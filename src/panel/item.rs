//! Menu items and their handles

use crate::geometry::{Rect, Vec2};
use crate::panel::Corner;
use crate::text::{LocalBounds, FALLBACK_FONT};
use crate::theme::Color;

/// Stable handle to an item owned by a [`crate::panel::Panel`].
///
/// Ids are never reused, so a handle to a removed item simply stops
/// resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

/// Text styling copied into every new item (the "template")
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStyle {
    /// Nominal glyph size in pixels; also the item's extent along the layout axis
    pub character_size: u32,
    /// Font name in the font cache
    pub font: String,
    pub color: Color,
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self {
            character_size: 20,
            font: FALLBACK_FONT.to_string(),
            color: Color::WHITE,
        }
    }
}

impl ItemStyle {
    pub fn with_character_size(mut self, character_size: u32) -> Self {
        self.character_size = character_size;
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// One line of text in a panel.
///
/// `position` is where the item's anchor sits on the surface; `origin` is
/// the anchor's offset inside the item's local box, derived from the corner
/// the item was aligned to and the measured bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ItemId,
    text: String,
    style: ItemStyle,
    bounds: LocalBounds,
    pub(crate) position: Vec2,
    pub(crate) origin: Vec2,
    anchor: Corner,
}

impl Item {
    pub(crate) fn new(id: ItemId, text: String, style: ItemStyle, bounds: LocalBounds) -> Self {
        Self {
            id,
            text,
            style,
            bounds,
            position: Vec2::ZERO,
            origin: Vec2::ZERO,
            anchor: Corner::TopLeft,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &ItemStyle {
        &self.style
    }

    pub fn character_size(&self) -> u32 {
        self.style.character_size
    }

    /// Extent along the layout axis
    pub(crate) fn extent(&self) -> f32 {
        self.style.character_size as f32
    }

    pub fn bounds(&self) -> LocalBounds {
        self.bounds
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Corner of the measured box the item is anchored at
    pub fn anchor(&self) -> Corner {
        self.anchor
    }

    /// Surface position of the local origin, i.e. where text drawing starts
    pub fn draw_origin(&self) -> Vec2 {
        self.position - self.origin
    }

    /// Inked area on the surface
    pub fn global_bounds(&self) -> Rect {
        Rect::from_origin_size(self.draw_origin() + self.bounds.offset(), self.bounds.size())
    }

    pub(crate) fn set_text(&mut self, text: String, bounds: LocalBounds) {
        self.text = text;
        self.bounds = bounds;
    }

    pub(crate) fn set_bounds(&mut self, bounds: LocalBounds) {
        self.bounds = bounds;
    }

    fn origin_for(&self, corner: Corner) -> Vec2 {
        corner.anchor_in(self.bounds.size()) + self.bounds.offset()
    }

    /// Anchor the item at `corner` of its measured box
    pub(crate) fn align_to(&mut self, corner: Corner) {
        self.anchor = corner;
        self.origin = self.origin_for(corner);
    }

    /// True once the measured box changed under the current anchor
    pub(crate) fn needs_realign(&self) -> bool {
        self.origin != self.origin_for(self.anchor)
    }

    /// Refresh the origin for the new box, keeping the anchor corner
    pub(crate) fn realign(&mut self) {
        self.origin = self.origin_for(self.anchor);
    }
}
