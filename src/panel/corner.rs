//! Screen corners and panel kinds

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PanelError;
use crate::geometry::Vec2;

/// A corner of a rectangle: the surface for docking, an item's own box for
/// text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners for iteration
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub fn is_top(&self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    /// Position of this corner inside a box of the given size whose
    /// top-left sits at the origin
    pub fn anchor_in(&self, size: Vec2) -> Vec2 {
        match self {
            Corner::TopLeft => Vec2::ZERO,
            Corner::TopRight => Vec2::new(size.x, 0.0),
            Corner::BottomLeft => Vec2::new(0.0, size.y),
            Corner::BottomRight => Vec2::new(size.x, size.y),
        }
    }

    /// Unit direction pointing from this corner into the box (`±1` per axis)
    pub fn inward(&self) -> Vec2 {
        match self {
            Corner::TopLeft => Vec2::new(1.0, 1.0),
            Corner::TopRight => Vec2::new(-1.0, 1.0),
            Corner::BottomLeft => Vec2::new(1.0, -1.0),
            Corner::BottomRight => Vec2::new(-1.0, -1.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Corner {
    type Err = PanelError;

    /// Accepts kebab, snake and camel spellings: `top-left`, `top_left`, `TopLeft`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "topleft" => Ok(Corner::TopLeft),
            "topright" => Ok(Corner::TopRight),
            "bottomleft" => Ok(Corner::BottomLeft),
            "bottomright" => Ok(Corner::BottomRight),
            _ => Err(PanelError::InvalidCorner(s.to_string())),
        }
    }
}

/// How a panel relates item alignment to its docking corner. Fixed at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelType {
    /// Text origin always follows the docking corner; bounds track padding
    #[default]
    Dynamic,
    /// Text origin is set independently of the docking corner
    Static,
}

impl PanelType {
    /// Whether the text origin is derived from the docking corner
    pub fn locks_text_origin(&self) -> bool {
        matches!(self, PanelType::Dynamic)
    }
}
