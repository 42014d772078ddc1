//! Panel system - a docked menu of text items
//!
//! A panel anchors itself to one corner of a render surface and stacks its
//! items away from that corner, keeping a bounding box that covers all of
//! them plus padding.
//!
//! ## Architecture
//!
//! - `Corner`: docking corner of the panel, alignment corner of each item
//! - `PanelType`: Dynamic (alignment follows docking) or Static
//! - `Item` / `ItemId`: owned text entries and the stable handles callers keep
//! - `Panel`: the layout engine; `draw()` renders it onto any `Surface`
//!
//! ## Integration
//!
//! - Text measurement via the `TextMeasure` trait in `text.rs`
//! - Drawing via the `Surface` trait in `surface.rs`
//! - Construction from YAML via `MenuConfig::build_panel()` in `config.rs`

mod corner;
mod item;
mod menu;
mod render;

pub use corner::{Corner, PanelType};
pub use item::{Item, ItemId, ItemStyle};
pub use menu::{
    DerivedGeometry, LayoutConfig, Panel, VisibilityFlags, DEFAULT_CAPACITY,
    DEFAULT_COMPONENT_BUFFER, DEFAULT_DOCKING_POSITION, DEFAULT_OUTLINE_PADDING, DEFAULT_PADDING,
    DEFAULT_TEXT_ORIGIN_POINT,
};
pub use render::item_outline_rect;
