use thiserror::Error;

/// Bootstrap failure. Every variant is fatal; the string is the platform
/// diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    #[error("SDL could not initialize! SDL Error: {0}")]
    Subsystem(String),

    #[error("Window could not be created! SDL Error: {0}")]
    Window(String),

    #[error("OpenGL context could not be created! SDL Error: {0}")]
    Context(String),

    #[error("Error loading OpenGL functions: {0}")]
    Functions(String),
}
