use resources::bmp::BMP;
use resources::{Catalog, Image};
use std::env;
use std::path::Path;
use std::process::ExitCode;

const USAGE: &str = "Usage: chessres [COMMAND] <input> [output]

Commands:
  show      Load the twelve piece sprites from a directory and print their scaled sizes.
  png2bmp   Convert an image file (PNG, JPEG, BMP, ...) to a 24-bit BMP file.

Examples:
  chessres show ./images
      Check that ./images holds all sprites (wp.png .. bK.png), scaled to 64 pixels.

  chessres show ./images 100
      Same, with 100 pixel squares.

  chessres png2bmp ./images/wK.png ./wK.bmp

Set RUST_LOG=debug to see every file as it is loaded.";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = env::args().collect::<Vec<String>>();
    if args.len() < 3 {
        println!("{USAGE}");
        return ExitCode::FAILURE;
    }
    let result = match args[1].as_str() {
        "show" => {
            let square = match args.get(3).map(|s| s.parse::<usize>()) {
                None => Ok(64),
                Some(Ok(n)) if n > 0 => Ok(n),
                Some(_) => Err(format!("invalid square size {:?}", args[3])),
            };
            square.and_then(|square| show(Path::new(&args[2]), square))
        }
        "png2bmp" => match args.get(3) {
            Some(dst) => png2bmp(Path::new(&args[2]), Path::new(dst)),
            None => Err("missing output bitmap file name".to_string()),
        },
        s => Err(format!("unknown subcommand {s}")),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("chessres: {e}");
            ExitCode::FAILURE
        }
    }
}

fn show(dir: &Path, square: usize) -> Result<(), String> {
    let catalog = Catalog::load(dir, square).map_err(|e| e.to_string())?;
    for (code, img) in catalog.iter() {
        println!("\t{code}\t{:16}\t{} x {}", code.file_name(), img.width, img.height);
    }
    Ok(())
}

fn png2bmp(src: &Path, dst: &Path) -> Result<(), String> {
    let img = Image::load(src).map_err(|e| e.to_string())?;
    println!("{src:?}: {} x {}", img.width, img.height);
    BMP::from_rgba(img.width, img.height, &img.pixels)
        .to_file(dst)
        .map_err(|e| format!("writing to {dst:?} error: {e}"))
}
