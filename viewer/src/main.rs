use anyhow::Context;
use log::info;
use resources::Catalog;
use viewer::app::{self, WindowHost};
use viewer::{GameState, Settings};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::default();
    settings.validate()?;

    let mut host = WindowHost::open(&settings).context("Game initialization failure")?;
    let game = GameState::new();
    // only once, before the loop
    let catalog = Catalog::load(&settings.image_dir, settings.square_size())
        .with_context(|| format!("can't load piece images from {:?}", settings.image_dir))?;

    let frames = app::run(&mut host, &settings, &catalog, &game)?;
    info!("bye after {frames} frames");
    Ok(())
}
