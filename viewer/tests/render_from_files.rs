use backend::frame::{Color, Frame};
use resources::bmp::BMP;
use resources::{Catalog, PieceCode, Side, ALL_PIECES};
use std::fs;
use std::path::PathBuf;
use viewer::render::draw_game_state;
use viewer::{Board, GameState, Settings};

const WHITE_PIECE: [u8; 4] = [250, 240, 230, 255];
const BLACK_PIECE: [u8; 4] = [10, 20, 30, 255];

fn sprite_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("viewer-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    for code in ALL_PIECES {
        let rgba = match code.side {
            Side::White => WHITE_PIECE,
            Side::Black => BLACK_PIECE,
        }
        .repeat(16 * 16);
        BMP::from_rgba(16, 16, &rgba)
            .to_file(&dir.join(code.file_name()))
            .unwrap();
    }
    dir
}

#[test]
fn starting_position_from_sprite_files() {
    let dir = sprite_dir("start");
    let settings = Settings {
        image_dir: dir.clone(),
        ..Settings::default()
    };
    let catalog = Catalog::load(&settings.image_dir, settings.square_size()).unwrap();
    assert!(catalog.iter().all(|(_, img)| img.width == 64 && img.height == 64));

    let mut frame = Frame::new(512, 512, settings.background);
    draw_game_state(&mut frame, &settings, &catalog, &GameState::new()).unwrap();

    let black = Color::rgb(BLACK_PIECE[0], BLACK_PIECE[1], BLACK_PIECE[2]);
    let white = Color::rgb(WHITE_PIECE[0], WHITE_PIECE[1], WHITE_PIECE[2]);
    // black rook top left, white rook bottom right, empty middle
    assert_eq!(frame.pixel(0, 0), black);
    assert_eq!(frame.pixel(511, 511), white);
    assert_eq!(frame.pixel(3 * 64 + 10, 3 * 64 + 10), Color::WHITE);
    assert_eq!(frame.pixel(4 * 64 + 10, 3 * 64 + 10), Color::GRAY);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn lone_king_text_board() {
    let dir = sprite_dir("king");
    let settings = Settings::default();
    let catalog = Catalog::load(&dir, settings.square_size()).unwrap();
    let board = Board::from_rows(&[
        "wK -- -- -- -- -- -- --",
        "-- -- -- -- -- -- -- --",
        "-- -- -- -- -- -- -- --",
        "-- -- -- -- -- -- -- --",
        "-- -- -- -- -- -- -- --",
        "-- -- -- -- -- -- -- --",
        "-- -- -- -- -- -- -- --",
        "-- -- -- -- -- -- -- --",
    ])
    .unwrap();
    assert_eq!(board.get(0, 0), Some("wK".parse::<PieceCode>().unwrap()));

    let mut frame = Frame::new(512, 512, Color::BLACK);
    draw_game_state(&mut frame, &settings, &catalog, &board).unwrap();

    let white = Color::rgb(WHITE_PIECE[0], WHITE_PIECE[1], WHITE_PIECE[2]);
    assert_eq!(frame.pixel(0, 0), white);
    assert_eq!(frame.pixel(63, 63), white);
    assert_eq!(frame.pixel(64, 0), Color::GRAY);
    assert_eq!(frame.pixel(0, 64), Color::GRAY);
    assert_eq!(frame.pixel(64, 64), Color::WHITE);

    fs::remove_dir_all(&dir).unwrap();
}
