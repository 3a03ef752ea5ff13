use backend::app;
use backend::config::Config;
use backend::sdl::SdlBackend;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let status = app::run(SdlBackend::init, Config::DEFAULT);
    log::debug!("exiting with status {status}");
    std::process::exit(status);
}
