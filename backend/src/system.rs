use crate::config::Config;
use crate::error::InitError;
use crate::platform::{Backend, IoEvent, Viewport};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// A window with its drawing context and the subsystem that owns both.
///
/// Fields drop top to bottom, which is the reverse of acquisition: context,
/// then window, then subsystem.
pub struct System<B: Backend> {
    gl_ctx: B::Context,
    window: B::Window,
    backend: B,
    pub config: Config,
}

impl<B: Backend> System<B> {
    /// Brings the video subsystem up through `init`, then creates the window
    /// and context and prepares them for clearing.
    ///
    /// Stops at the first failing step. Whatever was acquired before it is
    /// released on the way out.
    pub fn new<F>(init: F, config: Config) -> Result<System<B>, InitError>
    where
        F: FnOnce(&Config) -> Result<B, InitError>,
    {
        let mut backend = init(&config)?;
        log::debug!("video subsystem initialized");

        let window = backend.create_window(&config)?;
        log::debug!(
            "window \"{}\" created ({}x{})",
            config.title,
            config.width,
            config.height
        );

        let gl_ctx = backend.create_context(&window)?;
        backend.load_functions(&gl_ctx)?;

        backend.set_viewport(&gl_ctx, Viewport::full(&config));
        backend.set_clear_color(&gl_ctx, config.clear_color);

        Ok(System {
            gl_ctx,
            window,
            backend,
            config,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.backend.viewport(&self.gl_ctx)
    }

    /// Drains pending events. Returns `false` if any of them asked to quit.
    pub fn process_io_events(&mut self) -> bool {
        let mut keep_running = true;
        while let Some(event) = self.backend.poll_event() {
            if event == IoEvent::Quit {
                keep_running = false;
            }
        }
        keep_running
    }

    pub fn clear_screen(&mut self) {
        self.backend.clear(&self.gl_ctx);
    }

    pub fn draw_to_screen(&mut self) {
        self.backend.present(&self.window);
    }

    /// One iteration: poll, clear, present.
    pub fn step(&mut self) -> LoopState {
        let state = if self.process_io_events() {
            LoopState::Running
        } else {
            LoopState::Stopped
        };
        self.clear_screen();
        self.draw_to_screen();
        state
    }

    /// Runs until a quit event arrives. Returns the number of frames
    /// presented.
    pub fn run(&mut self) -> u64 {
        let mut frames = 0;
        let mut state = LoopState::Running;
        while state == LoopState::Running {
            state = self.step();
            frames += 1;
        }
        log::debug!("quit requested after {frames} frames");
        frames
    }

    pub fn teardown(self) {
        let System {
            gl_ctx,
            window,
            backend,
            ..
        } = self;
        drop(gl_ctx);
        log::debug!("OpenGL context deleted");
        drop(window);
        log::debug!("window destroyed");
        drop(backend);
        log::debug!("video subsystem shut down");
    }
}
