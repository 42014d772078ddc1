//! Colors used when drawing a panel
//!
//! Colors are written as `#RRGGBB` or `#RRGGBBAA` strings in configuration
//! and resolved into [`PanelTheme`] once at load time.

use serde::{Deserialize, Serialize};

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|hex| u8::from_str_radix(hex, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Panel colors as written in configuration (hex strings)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelThemeData {
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_foreground")]
    pub foreground: String,
    #[serde(default = "default_outline")]
    pub outline: String,
    #[serde(default)]
    pub component_outline: Option<String>,
}

fn default_background() -> String {
    "#00000000".to_string()
}

fn default_foreground() -> String {
    "#FFFFFF".to_string()
}

fn default_outline() -> String {
    "#FFFFFF".to_string()
}

impl Default for PanelThemeData {
    fn default() -> Self {
        Self {
            background: default_background(),
            foreground: default_foreground(),
            outline: default_outline(),
            component_outline: None,
        }
    }
}

/// Resolved panel colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelTheme {
    /// Fill behind the whole panel (transparent by default)
    pub background: Color,
    /// Default text color for new items
    pub foreground: Color,
    /// Panel bounds outline
    pub outline: Color,
    /// Per-item outlines
    pub component_outline: Color,
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self {
            background: Color::TRANSPARENT,
            foreground: Color::WHITE,
            outline: Color::WHITE,
            component_outline: Color::WHITE,
        }
    }
}

impl PanelTheme {
    /// Resolve hex strings; the component outline falls back to the panel outline
    pub fn from_data(data: &PanelThemeData) -> Result<Self, String> {
        let outline = Color::from_hex(&data.outline)?;
        Ok(Self {
            background: Color::from_hex(&data.background)?,
            foreground: Color::from_hex(&data.foreground)?,
            outline,
            component_outline: match &data.component_outline {
                Some(hex) => Color::from_hex(hex)?,
                None => outline,
            },
        })
    }
}
