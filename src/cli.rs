//! Command-line argument parsing for the demo binary
//!
//! Supports:
//! - Loading an explicit config file
//! - Overriding docking corner, panel type and font
//! - Initial window size
//! - Extra items appended after the configured ones

use std::path::PathBuf;

use clap::Parser;

use crate::config::MenuConfig;
use crate::panel::{Corner, PanelType};

pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;

/// A docked text menu
#[derive(Parser, Debug)]
#[command(name = "dockmenu", version, about = "A docked text menu")]
pub struct CliArgs {
    /// Items to show, after any configured ones
    #[arg(value_name = "ITEMS")]
    pub items: Vec<String>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Docking corner (top-left, top-right, bottom-left, bottom-right)
    #[arg(short, long, value_name = "CORNER")]
    pub dock: Option<Corner>,

    /// Build a static panel (text origin independent of docking)
    #[arg(long = "static")]
    pub static_panel: bool,

    /// Font file used as the fallback font
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Initial window width
    #[arg(long, default_value_t = DEFAULT_WINDOW_WIDTH)]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value_t = DEFAULT_WINDOW_HEIGHT)]
    pub height: u32,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub menu: MenuConfig,
    pub window_size: (u32, u32),
}

impl CliArgs {
    /// Load the menu config (explicit path or default location) and apply
    /// the command-line overrides on top
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let base = match &self.config {
            Some(path) => MenuConfig::load_from(path)?,
            None => MenuConfig::load(),
        };
        self.apply(base)
    }

    /// Apply overrides to an already loaded menu config
    pub fn apply(self, mut menu: MenuConfig) -> Result<StartupConfig, String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Window size must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }

        if let Some(dock) = self.dock {
            menu.docking = dock;
        }
        if self.static_panel {
            menu.panel_type = PanelType::Static;
        }
        if self.font.is_some() {
            menu.font_path = self.font;
        }
        menu.items.extend(self.items);

        Ok(StartupConfig {
            menu,
            window_size: (self.width, self.height),
        })
    }
}
