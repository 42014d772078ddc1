//! Error type for panel operations
//!
//! Every failing operation leaves the panel untouched, so callers may retry
//! or ignore these freely.

use thiserror::Error;

use crate::panel::ItemId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PanelError {
    #[error("Panel is full ({capacity} items)")]
    CapacityExceeded { capacity: usize },

    #[error("Padding must not be negative (got {x}, {y})")]
    NegativePadding { x: f32, y: f32 },

    #[error("Component buffer must not be negative (got {0})")]
    NegativeBuffer(i32),

    #[error("Outline padding must not be negative (got {0})")]
    NegativeOutlinePadding(f32),

    #[error("Text origin follows the docking corner on dynamic panels")]
    TextOriginLocked,

    #[error("No item with id {0:?}")]
    ItemNotFound(ItemId),

    #[error("No item with text {0:?}")]
    TextNotFound(String),

    #[error("Panel has no items")]
    Empty,

    #[error("Invalid corner: {0}")]
    InvalidCorner(String),
}

pub type Result<T> = std::result::Result<T, PanelError>;
