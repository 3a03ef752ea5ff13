use crate::config::Config;
use crate::error::InitError;
use crate::platform::Backend;
use crate::system::System;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INIT_FAILURE: i32 = -1;

/// Bootstrap, loop until quit, tear down. Returns the process exit status.
pub fn run<B, F>(init: F, config: Config) -> i32
where
    B: Backend,
    F: FnOnce(&Config) -> Result<B, InitError>,
{
    let mut system = match System::new(init, config) {
        Ok(s) => s,
        Err(e) => {
            log::error!("{e}");
            log::error!("Failed to initialize!");
            return EXIT_INIT_FAILURE;
        }
    };
    log::info!(
        "{}x{} window ready, entering event loop",
        system.config.width,
        system.config.height
    );
    system.run();
    system.teardown();
    EXIT_SUCCESS
}
