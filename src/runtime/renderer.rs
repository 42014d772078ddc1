//! Window renderer: draws the panel into a back buffer and presents it
//! through softbuffer

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Result;
use softbuffer::{Context, Surface};
use winit::window::Window;

use dockmenu::panel::Panel;
use dockmenu::text::{FontCache, TextMeasure};
use dockmenu::theme::Color;
use dockmenu::view::{Canvas, Frame, GlyphCaches};

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Softbuffer doesn't guarantee buffer contents are preserved between
    /// frames, so we draw into our own buffer and copy on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    glyphs: GlyphCaches,
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();
        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;
        surface
            .resize(non_zero(size.width), non_zero(size.height))
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        Ok(Self {
            surface,
            back_buffer: vec![0u32; (size.width as usize) * (size.height as usize)],
            width: size.width,
            height: size.height,
            glyphs: GlyphCaches::new(),
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if self.width == width && self.height == height {
            return Ok(());
        }

        self.width = width;
        self.height = height;
        self.back_buffer
            .resize((width as usize) * (height as usize), 0);
        self.surface
            .resize(non_zero(width), non_zero(height))
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        tracing::debug!("Renderer resized to {}x{}", width, height);
        Ok(())
    }

    pub fn render<M: TextMeasure>(
        &mut self,
        panel: &mut Panel<M>,
        fonts: &FontCache,
        clear_color: Color,
    ) -> Result<()> {
        // Minimized windows report a zero size
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        {
            let mut frame = Frame::new(
                &mut self.back_buffer,
                self.width as usize,
                self.height as usize,
            );
            frame.clear(clear_color.to_argb_u32());
            let mut canvas = Canvas::new(&mut frame, fonts, &mut self.glyphs);
            panel.draw(&mut canvas);
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        if buffer.len() == self.back_buffer.len() {
            buffer.copy_from_slice(&self.back_buffer);
        } else {
            tracing::warn!(
                "Surface buffer size {} does not match back buffer {}",
                buffer.len(),
                self.back_buffer.len()
            );
        }
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}
