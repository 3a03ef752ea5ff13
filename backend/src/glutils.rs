use gl::types::*;
use std::ffi::CStr;

pub fn gl_error() -> Option<GLenum> {
    let err = unsafe { gl::GetError() };
    if err == gl::NO_ERROR {
        return None;
    }
    Some(err)
}

pub fn gl_error_name(err: GLenum) -> &'static str {
    match err {
        gl::INVALID_ENUM => "GL_INVALID_ENUM",
        gl::INVALID_VALUE => "GL_INVALID_VALUE",
        gl::INVALID_OPERATION => "GL_INVALID_OPERATION",
        gl::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        gl::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        _ => "unknown GL error",
    }
}

/// Drains the GL error queue, logging each entry.
pub fn check_gl_err(what: &str) {
    while let Some(err) = gl_error() {
        log::warn!("{what}: {} (0x{err:04x})", gl_error_name(err));
    }
}

pub fn gl_string(name: GLenum) -> Option<String> {
    let ptr = unsafe { gl::GetString(name) };
    if ptr.is_null() {
        return None;
    }
    let s = unsafe { CStr::from_ptr(ptr.cast()) };
    Some(s.to_string_lossy().into_owned())
}

pub fn log_opengl_info() {
    let unknown = || "<unknown>".to_string();
    log::info!("GL_VENDOR = {}", gl_string(gl::VENDOR).unwrap_or_else(unknown));
    log::info!("GL_RENDERER = {}", gl_string(gl::RENDERER).unwrap_or_else(unknown));
    log::info!("GL_VERSION = {}", gl_string(gl::VERSION).unwrap_or_else(unknown));
}

pub fn gl_viewport() -> [GLint; 4] {
    let mut vp: [GLint; 4] = [0; 4];
    unsafe { gl::GetIntegerv(gl::VIEWPORT, vp.as_mut_ptr()) };
    vp
}
