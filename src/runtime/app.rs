use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use dockmenu::cli::StartupConfig;
use dockmenu::panel::{ItemId, Panel};
use dockmenu::text::FontCache;
use dockmenu::theme::Color;

use super::input::{action_for_key, apply_action};
use super::renderer::Renderer;

/// How often the frame-time item is refreshed
const TICK_INTERVAL: Duration = Duration::from_millis(250);

const CLEAR_COLOR: Color = Color::rgb(0x1E, 0x1E, 0x2E);

pub struct App {
    panel: Panel<Rc<FontCache>>,
    fonts: Rc<FontCache>,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    window_size: (u32, u32),
    /// Live item showing the last frame time; re-anchored on every update
    frame_time_item: Option<ItemId>,
    last_frame_time: Duration,
    last_tick: Instant,
    items_added: usize,
}

impl App {
    pub fn new(startup_config: StartupConfig) -> Result<Self> {
        let menu = startup_config.menu;
        let fonts = Rc::new(FontCache::with_fallback_file(menu.font_path.as_deref()));
        let mut panel = menu
            .build_panel(Rc::clone(&fonts))
            .map_err(|e| anyhow::anyhow!("Invalid menu configuration: {}", e))?;

        let frame_time_item = match panel.add_item(&frame_time_text(Duration::ZERO)) {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!("No room for the frame time item: {}", e);
                None
            }
        };

        Ok(Self {
            panel,
            fonts,
            renderer: None,
            window: None,
            context: None,
            window_size: startup_config.window_size,
            frame_time_item,
            last_frame_time: Duration::ZERO,
            last_tick: Instant::now(),
            items_added: 0,
        })
    }

    fn init_renderer(&mut self, window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<()> {
        self.renderer = Some(Renderer::new(window, context)?);
        Ok(())
    }

    /// Returns whether the window needs a redraw
    fn handle_event(&mut self, event: &WindowEvent) -> Result<bool> {
        match event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height)?;
                }
                Ok(true)
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                Ok(match action_for_key(&event.logical_key) {
                    Some(action) => apply_action(&mut self.panel, action, &mut self.items_added),
                    None => false,
                })
            }
            WindowEvent::RedrawRequested => {
                self.render()?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn render(&mut self) -> Result<()> {
        let start = Instant::now();
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&mut self.panel, &self.fonts, CLEAR_COLOR)?;
        }
        self.last_frame_time = start.elapsed();
        Ok(())
    }

    /// Refresh the frame-time item. Returns whether its text changed.
    fn tick(&mut self) -> bool {
        let Some(id) = self.frame_time_item else {
            return false;
        };

        let text = frame_time_text(self.last_frame_time);
        match self.panel.set_item_text(id, &text) {
            Ok(()) => true,
            Err(e) => {
                // Removed from the demo by the user
                tracing::debug!("Frame time item gone: {}", e);
                self.frame_time_item = None;
                false
            }
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn frame_time_text(frame_time: Duration) -> String {
    format!("frame: {:.2} ms", frame_time.as_secs_f64() * 1000.0)
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.window_size;
        let window_attributes = Window::default_attributes()
            .with_title("dockmenu")
            .with_inner_size(LogicalSize::new(width, height));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Rc::new(window),
            Err(e) => {
                tracing::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };
        let context = match Context::new(Rc::clone(&window)) {
            Ok(context) => context,
            Err(e) => {
                tracing::error!("Failed to create softbuffer context: {}", e);
                event_loop.exit();
                return;
            }
        };

        if let Err(e) = self.init_renderer(Rc::clone(&window), &context) {
            tracing::error!("{}", e);
            event_loop.exit();
            return;
        }
        window.request_redraw();
        self.window = Some(window);
        self.context = Some(context);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = &self.window else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        match self.handle_event(&event) {
            Ok(true) => self.request_redraw(),
            Ok(false) => {}
            Err(e) => {
                tracing::error!("{:#}", e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let next_tick = self.last_tick + TICK_INTERVAL;
        event_loop.set_control_flow(ControlFlow::WaitUntil(next_tick));

        let now = Instant::now();
        if now >= next_tick {
            self.last_tick = now;
            if self.tick() {
                self.request_redraw();
            }
        }
    }
}
