//! Per-frame drawing of a panel

use crate::geometry::{rounded_rect_points, Rect};
use crate::panel::{Item, Panel};
use crate::surface::{Surface, TextRun};
use crate::text::TextMeasure;

/// Line segments per rounded corner of an item outline
const OUTLINE_CORNER_SEGMENTS: usize = 4;

/// Thickness of the panel bounds outline
const BOUNDS_OUTLINE_THICKNESS: f32 = 1.0;

impl<M: TextMeasure> Panel<M> {
    /// Draw the panel. Must be called once per frame.
    ///
    /// Applies pending layout work first: a full reflow after a docking or
    /// surface-size change, and re-anchoring of items whose measured box
    /// changed since they were aligned.
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let (width, height) = surface.size();
        self.set_surface_size(width as f32, height as f32);

        if self.needs_reflow() {
            self.reflow();
        }
        self.realign_items();

        let visibility = self.visibility();
        if !visibility.shown {
            return;
        }

        let theme = *self.theme();
        if self.has_frame() && !theme.background.is_transparent() {
            surface.fill_rect(self.panel_rect(), theme.background);
        }

        let outline_padding = self.layout().outline_padding;
        for item in self.items() {
            surface.draw_text(&TextRun {
                text: item.text(),
                font: &item.style().font,
                character_size: item.character_size(),
                position: item.draw_origin(),
                color: item.style().color,
            });

            if visibility.component_outlines_shown {
                let rect = item_outline_rect(item, outline_padding);
                let radius = item.character_size() as f32 * outline_padding / 2.0;
                let points = rounded_rect_points(rect, radius, OUTLINE_CORNER_SEGMENTS);
                surface.outline_polygon(&points, theme.component_outline);
            }
        }

        if visibility.bounds_shown && self.shows_bounds_outline() {
            surface.outline_rect(
                self.panel_rect(),
                BOUNDS_OUTLINE_THICKNESS,
                theme.outline,
            );
        }

        tracing::trace!("Drew panel with {} item(s)", self.len());
    }

    /// Re-anchor items whose text changed width since they were aligned.
    /// Each item keeps the corner it was added with, and only the
    /// horizontal position moves.
    fn realign_items(&mut self) {
        let inner_x = self.inner_corner().x;
        for item in self.items_mut() {
            if item.needs_realign() {
                item.realign();
                item.position.x = inner_x;
            }
        }
    }

    /// Static panels always frame themselves; dynamic ones only when they
    /// hold content beyond their padding
    fn shows_bounds_outline(&self) -> bool {
        match self.panel_type() {
            crate::panel::PanelType::Static => true,
            crate::panel::PanelType::Dynamic => self.bounds().y > self.padding().y * 2.0,
        }
    }
}

/// Outline around an item's ink, grown by `outline_padding × size` overall
pub fn item_outline_rect(item: &Item, outline_padding: f32) -> Rect {
    let grow = item.character_size() as f32 * outline_padding / 2.0;
    item.global_bounds().inflate(grow, grow)
}
