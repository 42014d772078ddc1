//! Menu configuration persistence
//!
//! Stores panel preferences in `~/.config/dockmenu/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::panel::{
    Corner, ItemStyle, Panel, PanelType, DEFAULT_CAPACITY, DEFAULT_COMPONENT_BUFFER,
    DEFAULT_DOCKING_POSITION, DEFAULT_OUTLINE_PADDING, DEFAULT_PADDING,
    DEFAULT_TEXT_ORIGIN_POINT,
};
use crate::text::TextMeasure;
use crate::theme::{PanelTheme, PanelThemeData};

/// Panel configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub panel_type: PanelType,
    pub docking: Corner,
    /// Only honored by static panels
    pub text_origin: Corner,
    /// Horizontal and vertical padding, `[x, y]`
    pub padding: [f32; 2],
    pub component_buffer: i32,
    pub outline_padding: f32,
    pub capacity: usize,
    pub character_size: u32,
    /// Fallback font; system fonts are tried when unset
    pub font_path: Option<PathBuf>,
    pub theme: PanelThemeData,
    pub shown: bool,
    pub bounds_shown: bool,
    pub component_outlines_shown: bool,
    /// Items added in order when the panel is built
    pub items: Vec<String>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            panel_type: PanelType::default(),
            docking: DEFAULT_DOCKING_POSITION,
            text_origin: DEFAULT_TEXT_ORIGIN_POINT,
            padding: [DEFAULT_PADDING.x, DEFAULT_PADDING.y],
            component_buffer: DEFAULT_COMPONENT_BUFFER,
            outline_padding: DEFAULT_OUTLINE_PADDING,
            capacity: DEFAULT_CAPACITY,
            character_size: ItemStyle::default().character_size,
            font_path: None,
            theme: PanelThemeData::default(),
            shown: true,
            bounds_shown: false,
            component_outlines_shown: false,
            items: Vec::new(),
        }
    }
}

impl MenuConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::warn!("{}", e);
            Self::default()
        })
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        let config = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Build a panel from this config.
    ///
    /// Invalid layout values and theme colors are errors. Items that do not
    /// fit are logged and skipped.
    pub fn build_panel<M: TextMeasure>(&self, measure: M) -> Result<Panel<M>, String> {
        let theme = PanelTheme::from_data(&self.theme)?;
        let mut panel = Panel::with_capacity(self.panel_type, self.capacity, measure);

        panel.set_docking_position(self.docking);
        if self.panel_type == PanelType::Static {
            panel
                .set_text_origin_point(self.text_origin)
                .map_err(|e| e.to_string())?;
        }
        panel
            .set_padding(self.padding[0], self.padding[1])
            .map_err(|e| e.to_string())?;
        panel
            .set_component_buffer(self.component_buffer)
            .map_err(|e| e.to_string())?;
        panel
            .set_outline_padding(self.outline_padding)
            .map_err(|e| e.to_string())?;

        panel.set_theme(theme);
        let style = panel
            .default_style()
            .clone()
            .with_character_size(self.character_size);
        panel.set_default_style(style);

        if self.shown {
            panel.show();
        }
        if self.bounds_shown {
            panel.show_bounds();
        }
        if self.component_outlines_shown {
            panel.show_component_outlines();
        }

        for text in &self.items {
            if let Err(e) = panel.add_item(text) {
                tracing::warn!("Skipping configured item {:?}: {}", text, e);
            }
        }

        Ok(panel)
    }
}
