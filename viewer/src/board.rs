use crate::config::DIMENSION;
use crate::error::ViewerError;
use resources::{Kind, PieceCode, Side};
use std::fmt;

pub type Cell = Option<PieceCode>;

/// Text form of an empty cell.
pub const EMPTY: &str = "--";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; DIMENSION]; DIMENSION],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; DIMENSION]; DIMENSION],
        }
    }

    /// Standard initial position, black on the top rows.
    pub fn starting() -> Self {
        use Kind::*;
        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        let mut board = Self::empty();
        for (col, kind) in back_rank.into_iter().enumerate() {
            board.cells[0][col] = Some(PieceCode::new(Side::Black, kind));
            board.cells[1][col] = Some(PieceCode::new(Side::Black, Pawn));
            board.cells[6][col] = Some(PieceCode::new(Side::White, Pawn));
            board.cells[7][col] = Some(PieceCode::new(Side::White, kind));
        }
        board
    }

    /// Parses one row per string, eight whitespace separated tokens each:
    /// `--` for an empty cell or a piece code such as `wK`.
    pub fn from_rows(rows: &[&str]) -> Result<Self, ViewerError> {
        if rows.len() != DIMENSION {
            return Err(ViewerError::Board(format!(
                "expected {DIMENSION} rows, got {}",
                rows.len()
            )));
        }
        let mut board = Self::empty();
        for (r, line) in rows.iter().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != DIMENSION {
                return Err(ViewerError::Board(format!(
                    "row {r}: expected {DIMENSION} cells, got {}",
                    tokens.len()
                )));
            }
            for (c, token) in tokens.into_iter().enumerate() {
                board.cells[r][c] = match token {
                    EMPTY => None,
                    code => Some(
                        code.parse::<PieceCode>()
                            .map_err(|e| ViewerError::Board(format!("row {r}, column {c}: {e}")))?,
                    ),
                };
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Occupied cells in row-major order as `(row, col, code)`.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, usize, PieceCode)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, cell)| cell.map(|code| (r, c, code)))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(code) => code.to_string(),
                    None => EMPTY.to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Read-only view of whatever owns the position.
pub trait BoardSource {
    fn board(&self) -> &Board;
}

impl BoardSource for Board {
    fn board(&self) -> &Board {
        self
    }
}

/// Holds the position shown by the viewer. There are no rules here; the
/// board only changes through [`GameState::board_mut`].
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::starting(),
        }
    }

    pub fn with_board(board: Board) -> Self {
        Self { board }
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardSource for GameState {
    fn board(&self) -> &Board {
        &self.board
    }
}
