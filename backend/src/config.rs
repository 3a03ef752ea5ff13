#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Rgba {
        Rgba { r, g, b, a }
    }
}

/// Fixed window and context parameters. There is no runtime configuration
/// surface, everything is decided at compile time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub clear_color: Rgba,
    // major, minor; core profile
    pub gl_version: (u8, u8),
}

impl Config {
    pub const DEFAULT: Config = Config {
        title: "Apple Browser",
        width: 800,
        height: 600,
        // muted teal
        clear_color: Rgba::new(0.2, 0.3, 0.3, 1.0),
        gl_version: (3, 3),
    };
}

impl Default for Config {
    fn default() -> Self {
        Config::DEFAULT
    }
}
