use anyhow::Context;
use pieship::config;
use pieship::gui::app::AppModel;
use pieship::gui::pie::State;
use relm4::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    if let Err(e) = config::write_default_config() {
        log::warn!("Could not write default config: {}", e);
    }
    let config = config::load_or_default().context("Failed to load configuration")?;
    let state = State::new(&config).context("Invalid configuration")?;

    let app = RelmApp::new("org.pieship.pieship");

    app.run::<AppModel>(state);
    Ok(())
}
