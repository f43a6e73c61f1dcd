//! Hypersolid - 4D hypercube renderer
//!
//! Renders a rotating tesseract to a sequence of SVG frames.

use hypersolid::{App, AppConfig};

fn main() {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let result = App::new(config).and_then(|mut app| app.run());
    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
