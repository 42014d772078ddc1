//! dockmenu - a docked text menu for software-rendered windows
//!
//! A [`Panel`] keeps an ordered list of text items stacked against one
//! corner of a render surface, maintains the bounding box around them and
//! draws itself through the [`surface::Surface`] trait. Text measurement
//! goes through [`text::TextMeasure`], so layout runs without a real font.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod geometry;
pub mod panel;
pub mod surface;
pub mod text;
pub mod theme;
pub mod tracing;
pub mod view;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::MenuConfig;
pub use error::PanelError;
pub use panel::{Corner, ItemId, ItemStyle, Panel, PanelType};
pub use text::FontCache;
pub use theme::Color;
