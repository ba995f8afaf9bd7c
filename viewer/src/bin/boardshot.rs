use anyhow::Context;
use backend::frame::Frame;
use resources::bmp::BMP;
use resources::Catalog;
use std::env;
use std::path::Path;
use viewer::render::draw_game_state;
use viewer::{GameState, Settings};

const USAGE: &str = "Usage: boardshot <images_dir> <output.bmp>

Renders the initial position without opening a window and writes it as a
24-bit BMP file.

Examples:
  boardshot ./images ./board.bmp";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = env::args().collect::<Vec<String>>();
    if args.len() < 3 {
        println!("{USAGE}");
        std::process::exit(1);
    }
    let (image_dir, output) = (Path::new(&args[1]), Path::new(&args[2]));

    let settings = Settings {
        image_dir: image_dir.to_path_buf(),
        ..Settings::default()
    };
    settings.validate()?;
    let catalog = Catalog::load(&settings.image_dir, settings.square_size())
        .with_context(|| format!("can't load piece images from {image_dir:?}"))?;

    let mut frame = Frame::new(settings.window_size, settings.window_size, settings.background);
    draw_game_state(&mut frame, &settings, &catalog, &GameState::new())?;

    BMP::from_rgba(frame.width(), frame.height(), frame.pixels())
        .to_file(output)
        .with_context(|| format!("writing to {output:?}"))?;
    log::info!("{output:?}: {} x {}", frame.width(), frame.height());
    Ok(())
}
