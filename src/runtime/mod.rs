//! Runtime module - winit/platform integration for the demo
//!
//! - `app` - ApplicationHandler and window management
//! - `input` - Keyboard event to panel action mapping
//! - `renderer` - softbuffer presentation of the panel

pub mod app;
pub mod input;
pub mod renderer;

pub use app::App;
