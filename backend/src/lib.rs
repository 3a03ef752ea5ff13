pub mod app;
pub mod config;
pub mod error;
pub mod glutils;
pub mod platform;
pub mod sdl;
pub mod system;

#[cfg(test)]
mod mock;
