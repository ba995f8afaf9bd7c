//! Frame composition: squares first, pieces on top.

use crate::board::{Board, BoardSource};
use crate::config::{Settings, DIMENSION};
use crate::error::ViewerError;
use crate::surface::Surface;
use backend::frame::{Color, Rect};
use resources::Catalog;

pub fn square_rect(row: usize, col: usize, size: usize) -> Rect {
    Rect::new(
        (col * size) as i32,
        (row * size) as i32,
        size as u32,
        size as u32,
    )
}

/// Top left square always gets `colors[0]`.
pub fn draw_board<S: Surface>(surface: &mut S, size: usize, colors: [Color; 2]) {
    for r in 0..DIMENSION {
        for c in 0..DIMENSION {
            surface.fill_rect(square_rect(r, c, size), colors[(r + c) % 2]);
        }
    }
}

/// A piece without sprite aborts the frame.
pub fn draw_pieces<S: Surface>(
    surface: &mut S,
    board: &Board,
    catalog: &Catalog,
) -> Result<(), ViewerError> {
    let size = catalog.square_size();
    for (r, c, code) in board.pieces() {
        let sprite = catalog.sprite(code)?;
        surface.blit(sprite, square_rect(r, c, size));
    }
    Ok(())
}

pub fn draw_game_state<S, B>(
    surface: &mut S,
    settings: &Settings,
    catalog: &Catalog,
    game: &B,
) -> Result<(), ViewerError>
where
    S: Surface,
    B: BoardSource + ?Sized,
{
    if catalog.square_size() != settings.square_size() {
        return Err(ViewerError::Config(format!(
            "sprites are {} px but squares are {} px",
            catalog.square_size(),
            settings.square_size()
        )));
    }
    draw_board(surface, settings.square_size(), settings.square_colors);
    draw_pieces(surface, game.board(), catalog)
}
