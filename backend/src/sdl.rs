use crate::config::{Config, Rgba};
use crate::error::InitError;
use crate::glutils;
use crate::platform::{Backend, IoEvent, Viewport};
use sdl2::event::Event;
use sdl2::video::{GLContext, GLProfile, Window};

/// SDL2 video subsystem with an OpenGL loader.
pub struct SdlBackend {
    event_pump: sdl2::EventPump,
    video_subsystem: sdl2::VideoSubsystem,
    // last: SDL_Quit runs when this goes
    _sdl_context: sdl2::Sdl,
}

impl SdlBackend {
    pub fn init(config: &Config) -> Result<SdlBackend, InitError> {
        let sdl_context = sdl2::init().map_err(InitError::Subsystem)?;
        let video_subsystem = sdl_context.video().map_err(InitError::Subsystem)?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(config.gl_version.0, config.gl_version.1);

        let event_pump = sdl_context.event_pump().map_err(InitError::Subsystem)?;

        log::debug!(
            "SDL video driver: {}",
            video_subsystem.current_video_driver()
        );

        Ok(SdlBackend {
            event_pump,
            video_subsystem,
            _sdl_context: sdl_context,
        })
    }
}

/// Only a termination request stops the loop; keys, mouse and window
/// events are ignored.
fn map_event(event: &Event) -> IoEvent {
    match event {
        Event::Quit { .. } => IoEvent::Quit,
        _ => IoEvent::Other,
    }
}

// Entry points the loop needs; all must resolve.
const REQUIRED_GL: [(&str, fn() -> bool); 6] = [
    ("glViewport", gl::Viewport::is_loaded),
    ("glClearColor", gl::ClearColor::is_loaded),
    ("glClear", gl::Clear::is_loaded),
    ("glGetError", gl::GetError::is_loaded),
    ("glGetIntegerv", gl::GetIntegerv::is_loaded),
    ("glGetString", gl::GetString::is_loaded),
];

impl Backend for SdlBackend {
    type Window = Window;
    type Context = GLContext;

    fn create_window(&mut self, config: &Config) -> Result<Window, InitError> {
        match self
            .video_subsystem
            .window(config.title, config.width, config.height)
            .opengl()
            .build()
        {
            Ok(w) => Ok(w),
            Err(e) => Err(InitError::Window(e.to_string())),
        }
    }

    fn create_context(&mut self, window: &Window) -> Result<GLContext, InitError> {
        let gl_ctx = window.gl_create_context().map_err(InitError::Context)?;
        window.gl_make_current(&gl_ctx).map_err(InitError::Context)?;
        Ok(gl_ctx)
    }

    fn load_functions(&mut self, _ctx: &GLContext) -> Result<(), InitError> {
        let video_subsystem = &self.video_subsystem;
        gl::load_with(|name| video_subsystem.gl_get_proc_address(name) as *const _);

        let missing: Vec<&str> = REQUIRED_GL
            .iter()
            .filter(|(_, loaded)| !loaded())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(InitError::Functions(format!(
                "unresolved {}: {}",
                missing.join(", "),
                sdl2::get_error()
            )));
        }

        glutils::log_opengl_info();
        Ok(())
    }

    fn set_viewport(&mut self, _ctx: &GLContext, viewport: Viewport) {
        unsafe { gl::Viewport(viewport.x, viewport.y, viewport.width, viewport.height) };
        glutils::check_gl_err("glViewport");
    }

    fn viewport(&self, _ctx: &GLContext) -> Viewport {
        let [x, y, width, height] = glutils::gl_viewport();
        Viewport {
            x,
            y,
            width,
            height,
        }
    }

    fn set_clear_color(&mut self, _ctx: &GLContext, color: Rgba) {
        unsafe { gl::ClearColor(color.r, color.g, color.b, color.a) };
        glutils::check_gl_err("glClearColor");
    }

    fn poll_event(&mut self) -> Option<IoEvent> {
        self.event_pump.poll_event().map(|event| map_event(&event))
    }

    fn clear(&mut self, _ctx: &GLContext) {
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT) };
    }

    fn present(&mut self, window: &Window) {
        window.gl_swap_window();
    }
}
