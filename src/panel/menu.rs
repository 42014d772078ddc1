//! The panel aggregate and its layout rules
//!
//! Items stack along the vertical axis starting at the docking corner's
//! inner corner (the surface corner moved inward by the padding):
//!
//! - Top-docked panels grow downward: the first item sits at the inner
//!   corner and each later item sits `size + buffer` below its predecessor.
//! - Bottom-docked panels grow upward: the newest item sits at the inner
//!   corner and every earlier item sits `size + buffer` above its successor,
//!   where `size` is the successor's character size.
//!
//! Removal closes the gap so the same recurrence holds afterwards. A change
//! of docking corner or surface size flips every anchor, so it is handled by
//! a full reflow on the next draw instead of incrementally.

use crate::error::{PanelError, Result};
use crate::geometry::{Rect, Vec2};
use crate::panel::{Corner, Item, ItemId, ItemStyle, PanelType};
use crate::text::TextMeasure;
use crate::theme::{Color, PanelTheme};

pub const DEFAULT_CAPACITY: usize = 30;
pub const DEFAULT_DOCKING_POSITION: Corner = Corner::TopLeft;
pub const DEFAULT_TEXT_ORIGIN_POINT: Corner = Corner::TopLeft;
pub const DEFAULT_PADDING: Vec2 = Vec2::new(25.0, 25.0);
pub const DEFAULT_COMPONENT_BUFFER: i32 = 10;
/// Item outline inflation as a fraction of the item's character size
pub const DEFAULT_OUTLINE_PADDING: f32 = 0.25;

/// Caller-controlled layout parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub docking: Corner,
    pub text_origin: Corner,
    /// Space between the surface edges and the first item (never negative)
    pub padding: Vec2,
    /// Space between consecutive items (never negative)
    pub component_buffer: i32,
    pub outline_padding: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            docking: DEFAULT_DOCKING_POSITION,
            text_origin: DEFAULT_TEXT_ORIGIN_POINT,
            padding: DEFAULT_PADDING,
            component_buffer: DEFAULT_COMPONENT_BUFFER,
            outline_padding: DEFAULT_OUTLINE_PADDING,
        }
    }
}

/// Which layers `draw` emits. All hidden by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityFlags {
    pub shown: bool,
    pub bounds_shown: bool,
    pub component_outlines_shown: bool,
}

/// State derived from items and layout; never set directly by callers
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DerivedGeometry {
    /// Panel width and height, padding included
    pub bounds: Vec2,
    /// Surface size the current item positions were computed against
    pub surface_size: Vec2,
    /// Panel rectangle on the surface, kept in sync with `bounds`
    pub panel_rect: Rect,
    /// Items must be laid out from scratch before the next draw
    pub needs_reflow: bool,
}

/// A docked menu of text items.
///
/// Generic over the text measurer so layout can be exercised without a
/// real font.
pub struct Panel<M: TextMeasure> {
    panel_type: PanelType,
    capacity: usize,
    items: Vec<Item>,
    next_item_id: u64,
    layout: LayoutConfig,
    visibility: VisibilityFlags,
    geometry: DerivedGeometry,
    default_style: ItemStyle,
    theme: PanelTheme,
    measure: M,
}

impl<M: TextMeasure> Panel<M> {
    pub fn new(panel_type: PanelType, measure: M) -> Self {
        Self::with_capacity(panel_type, DEFAULT_CAPACITY, measure)
    }

    pub fn with_capacity(panel_type: PanelType, capacity: usize, measure: M) -> Self {
        let layout = LayoutConfig::default();
        let mut panel = Self {
            panel_type,
            capacity,
            items: Vec::with_capacity(capacity),
            next_item_id: 1,
            layout,
            visibility: VisibilityFlags::default(),
            geometry: DerivedGeometry::default(),
            default_style: ItemStyle::default(),
            theme: PanelTheme::default(),
            measure,
        };
        panel.fit_bounds();
        panel
    }

    /// Lay items out against a known surface size from the start, avoiding
    /// a reflow on the first draw
    pub fn with_surface_size(mut self, width: f32, height: f32) -> Self {
        self.set_surface_size(width, height);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn panel_type(&self) -> PanelType {
        self.panel_type
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn docking_position(&self) -> Corner {
        self.layout.docking
    }

    pub fn text_origin_point(&self) -> Corner {
        self.layout.text_origin
    }

    pub fn padding(&self) -> Vec2 {
        self.layout.padding
    }

    pub fn component_buffer(&self) -> i32 {
        self.layout.component_buffer
    }

    pub fn visibility(&self) -> VisibilityFlags {
        self.visibility
    }

    pub fn geometry(&self) -> &DerivedGeometry {
        &self.geometry
    }

    /// Panel width and height
    pub fn bounds(&self) -> Vec2 {
        self.geometry.bounds
    }

    /// Panel rectangle on the surface
    pub fn panel_rect(&self) -> Rect {
        self.geometry.panel_rect
    }

    pub fn needs_reflow(&self) -> bool {
        self.geometry.needs_reflow
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn default_style(&self) -> &ItemStyle {
        &self.default_style
    }

    /// Style used by [`Panel::add_item`]; existing items keep theirs
    pub fn set_default_style(&mut self, style: ItemStyle) {
        self.default_style = style;
    }

    pub fn theme(&self) -> &PanelTheme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: PanelTheme) {
        self.theme = theme;
        self.default_style.color = theme.foreground;
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.theme.background = color;
    }

    pub fn measure(&self) -> &M {
        &self.measure
    }

    // =========================================================================
    // Layout parameters
    // =========================================================================

    /// Dock the panel to `corner`. Dynamic panels move their text origin
    /// along with it. Existing items are laid out again on the next draw.
    pub fn set_docking_position(&mut self, corner: Corner) {
        if self.layout.docking == corner {
            return;
        }

        self.layout.docking = corner;
        if self.panel_type.locks_text_origin() {
            self.layout.text_origin = corner;
        }
        if !self.items.is_empty() {
            self.geometry.needs_reflow = true;
        }
        self.update_panel_rect();
        tracing::debug!("Docking panel to {}", corner);
    }

    /// Only allowed on static panels. Applies to items added afterwards;
    /// existing items stay anchored where they are until the next reflow.
    pub fn set_text_origin_point(&mut self, corner: Corner) -> Result<()> {
        if self.panel_type.locks_text_origin() {
            return Err(PanelError::TextOriginLocked);
        }
        self.layout.text_origin = corner;
        Ok(())
    }

    /// Change the space between the surface edges and the items. Items move
    /// away from the docked edges as padding grows.
    pub fn set_padding(&mut self, x: f32, y: f32) -> Result<()> {
        // Negated comparison so NaN is rejected too
        if !(x >= 0.0 && y >= 0.0) {
            return Err(PanelError::NegativePadding { x, y });
        }

        let new_padding = Vec2::new(x, y);
        let delta = new_padding - self.layout.padding;
        self.layout.padding = new_padding;

        if !self.items.is_empty() {
            let shift = delta.scale(self.layout.docking.inward());
            for item in &mut self.items {
                item.position = item.position + shift;
            }
        }

        if self.panel_type == PanelType::Dynamic {
            self.fit_bounds();
        } else {
            self.update_panel_rect();
        }
        Ok(())
    }

    /// Change the space between consecutive items, moving existing items
    /// so the stack stays anchored at the inner corner
    pub fn set_component_buffer(&mut self, buffer: i32) -> Result<()> {
        if buffer < 0 {
            return Err(PanelError::NegativeBuffer(buffer));
        }

        let delta = (buffer - self.layout.component_buffer) as f32;
        self.layout.component_buffer = buffer;
        if delta == 0.0 || self.items.is_empty() {
            return Ok(());
        }

        let count = self.items.len();
        let direction = self.layout.docking.inward().y;
        let top = self.layout.docking.is_top();
        for (index, item) in self.items.iter_mut().enumerate() {
            // Number of gaps between this item and the docked edge
            let gaps = if top { index } else { count - 1 - index };
            item.position.y += direction * gaps as f32 * delta;
        }
        self.fit_bounds();
        Ok(())
    }

    /// Inflation of item outlines, as a fraction of character size
    pub fn set_outline_padding(&mut self, ratio: f32) -> Result<()> {
        if !(ratio >= 0.0) {
            return Err(PanelError::NegativeOutlinePadding(ratio));
        }
        self.layout.outline_padding = ratio;
        self.fit_bounds();
        Ok(())
    }

    /// Record the surface size items are laid out against. A change with
    /// items present schedules a reflow.
    pub fn set_surface_size(&mut self, width: f32, height: f32) {
        let size = Vec2::new(width, height);
        if self.geometry.surface_size == size {
            return;
        }

        self.geometry.surface_size = size;
        if !self.items.is_empty() {
            self.geometry.needs_reflow = true;
        }
        self.update_panel_rect();
        tracing::trace!("Surface resized to {}x{}", width, height);
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    pub fn show(&mut self) {
        self.visibility.shown = true;
    }

    pub fn hide(&mut self) {
        self.visibility.shown = false;
    }

    pub fn toggle_shown(&mut self) {
        self.visibility.shown = !self.visibility.shown;
    }

    pub fn show_bounds(&mut self) {
        self.visibility.bounds_shown = true;
    }

    pub fn hide_bounds(&mut self) {
        self.visibility.bounds_shown = false;
    }

    pub fn toggle_bounds(&mut self) {
        self.visibility.bounds_shown = !self.visibility.bounds_shown;
    }

    pub fn show_component_outlines(&mut self) {
        self.visibility.component_outlines_shown = true;
    }

    pub fn hide_component_outlines(&mut self) {
        self.visibility.component_outlines_shown = false;
    }

    pub fn toggle_component_outlines(&mut self) {
        self.visibility.component_outlines_shown = !self.visibility.component_outlines_shown;
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Add an item using the panel's default style
    pub fn add_item(&mut self, text: &str) -> Result<ItemId> {
        let style = self.default_style.clone();
        self.add_item_with_style(text, &style)
    }

    /// Add an item copying `style`. Fails without side effects when the
    /// panel is full.
    pub fn add_item_with_style(&mut self, text: &str, style: &ItemStyle) -> Result<ItemId> {
        if self.is_full() {
            tracing::warn!(
                "Not able to add menu item {:?}: maximum of {} items already added",
                text,
                self.capacity
            );
            return Err(PanelError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let id = ItemId(self.next_item_id);
        self.next_item_id += 1;

        let bounds = self
            .measure
            .measure(text, &style.font, style.character_size);
        let item = Item::new(id, text.to_string(), style.clone(), bounds);
        self.place(item);
        self.fit_bounds();

        tracing::debug!("Added item {:?} ({} of {})", text, self.items.len(), self.capacity);
        Ok(id)
    }

    /// Remove an item, closing the gap it leaves
    pub fn remove_item(&mut self, id: ItemId) -> Result<()> {
        let index = self
            .index_of(id)
            .ok_or(PanelError::ItemNotFound(id))?;
        let removed = self.items.remove(index);

        let shift = removed.extent() + self.layout.component_buffer as f32;
        if self.layout.docking.is_top() {
            // Later items move back toward the docked edge
            for item in &mut self.items[index..] {
                item.position.y -= shift;
            }
        } else {
            // Earlier items sit above the removed one; move them down
            for item in &mut self.items[..index] {
                item.position.y += shift;
            }
        }

        self.fit_bounds();
        tracing::debug!("Removed item {:?}", removed.text());
        Ok(())
    }

    pub fn remove_first(&mut self) -> Result<()> {
        let id = self.items.first().map(Item::id).ok_or(PanelError::Empty)?;
        self.remove_item(id)
    }

    pub fn remove_last(&mut self) -> Result<()> {
        let id = self.items.last().map(Item::id).ok_or(PanelError::Empty)?;
        self.remove_item(id)
    }

    /// Remove the first item showing `text`
    pub fn remove_item_by_text(&mut self, text: &str) -> Result<()> {
        let id = self
            .find_item(text)
            .ok_or_else(|| PanelError::TextNotFound(text.to_string()))?;
        self.remove_item(id)
    }

    /// First item, in display order, whose content equals `text`
    pub fn find_item(&self, text: &str) -> Option<ItemId> {
        self.items
            .iter()
            .find(|item| item.text() == text)
            .map(Item::id)
    }

    /// Replace an item's text. The item keeps its place; its anchor is
    /// refreshed on the next draw if the new text changed its measured box.
    pub fn set_item_text(&mut self, id: ItemId, text: &str) -> Result<()> {
        let index = self
            .index_of(id)
            .ok_or(PanelError::ItemNotFound(id))?;
        let item = &mut self.items[index];
        if item.text() == text {
            return Ok(());
        }

        let bounds = self
            .measure
            .measure(text, &item.style().font, item.character_size());
        item.set_text(text.to_string(), bounds);
        self.fit_bounds();
        Ok(())
    }

    // =========================================================================
    // Layout internals
    // =========================================================================

    fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Docking corner moved inward by the padding; anchor of the first item
    pub fn inner_corner(&self) -> Vec2 {
        let docking = self.layout.docking;
        let outer = docking.anchor_in(self.geometry.surface_size);
        outer + self.layout.padding.scale(docking.inward())
    }

    /// Align `item` and append it at the growth end of the stack
    fn place(&mut self, mut item: Item) {
        item.align_to(self.layout.text_origin);

        let inner = self.inner_corner();
        let buffer = self.layout.component_buffer as f32;
        if self.layout.docking.is_top() {
            let y = match self.items.last() {
                Some(prev) => prev.position.y + prev.extent() + buffer,
                None => inner.y,
            };
            item.position = Vec2::new(inner.x, y);
        } else {
            let shift = item.extent() + buffer;
            for prev in &mut self.items {
                prev.position.y -= shift;
            }
            item.position = inner;
        }

        self.items.push(item);
    }

    /// Lay every item out again from scratch, in display order.
    ///
    /// Items are re-measured and keep their ids. This is the expensive path
    /// taken after docking or surface changes.
    pub(crate) fn reflow(&mut self) {
        let items = std::mem::take(&mut self.items);
        tracing::debug!("Reflowing {} item(s)", items.len());

        for mut item in items {
            let bounds = self.measure.measure(
                item.text(),
                &item.style().font,
                item.character_size(),
            );
            item.set_bounds(bounds);
            self.place(item);
        }

        self.geometry.needs_reflow = false;
        self.fit_bounds();
    }

    /// Extra width/height an item's outline adds to the panel
    fn outline_inflation(&self, item: &Item) -> f32 {
        item.extent() * self.layout.outline_padding / 2.0
    }

    /// Recompute bounds from the items, padding, buffer and outline padding
    fn fit_bounds(&mut self) {
        let padding = self.layout.padding;
        let buffer = self.layout.component_buffer as f32;

        let width = self
            .items
            .iter()
            .map(|item| item.bounds().width + padding.x * 2.0 + self.outline_inflation(item))
            .fold(padding.x * 2.0, f32::max);

        let height = match self.items.first() {
            Some(first) => {
                let extents: f32 = self.items.iter().map(Item::extent).sum();
                let gaps = (self.items.len() - 1) as f32 * buffer;
                padding.y * 2.0 + extents + gaps + self.outline_inflation(first)
            }
            None => padding.y * 2.0,
        };

        self.geometry.bounds = Vec2::new(width, height);
        self.update_panel_rect();
    }

    fn update_panel_rect(&mut self) {
        let docking = self.layout.docking;
        let bounds = self.geometry.bounds;
        let top_left =
            docking.anchor_in(self.geometry.surface_size) - docking.anchor_in(bounds);
        self.geometry.panel_rect = Rect::from_origin_size(top_left, bounds);
    }

    /// Whether `draw` should render the panel-wide layers (background and
    /// bounds outline). Empty dynamic panels have nothing to frame.
    pub(crate) fn has_frame(&self) -> bool {
        self.panel_type == PanelType::Static || !self.items.is_empty()
    }

    pub(crate) fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }
}
