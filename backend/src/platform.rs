use crate::config::{Config, Rgba};
use crate::error::InitError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn full(config: &Config) -> Viewport {
        Viewport {
            x: 0,
            y: 0,
            width: config.width as i32,
            height: config.height as i32,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IoEvent {
    Quit,
    // anything else the platform delivers; ignored
    Other,
}

/// Windowing and drawing primitives of an already initialized video
/// subsystem. Dropping the implementor shuts the subsystem down, dropping a
/// `Window` destroys it and dropping a `Context` deletes it.
///
/// Drawing calls take the context by reference so they can only be issued
/// while one is alive.
pub trait Backend {
    type Window;
    type Context;

    fn create_window(&mut self, config: &Config) -> Result<Self::Window, InitError>;

    fn create_context(&mut self, window: &Self::Window) -> Result<Self::Context, InitError>;

    /// Resolves the drawing function table for `ctx`.
    fn load_functions(&mut self, ctx: &Self::Context) -> Result<(), InitError>;

    fn set_viewport(&mut self, ctx: &Self::Context, viewport: Viewport);

    fn viewport(&self, ctx: &Self::Context) -> Viewport;

    fn set_clear_color(&mut self, ctx: &Self::Context, color: Rgba);

    /// Next pending event, `None` once the queue is drained.
    fn poll_event(&mut self) -> Option<IoEvent>;

    fn clear(&mut self, ctx: &Self::Context);

    /// Presents the back buffer; may block on vsync.
    fn present(&mut self, window: &Self::Window);
}
