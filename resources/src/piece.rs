use crate::error::ResourceError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn prefix(self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }

    pub fn from_prefix(c: char) -> Option<Side> {
        match c {
            'w' => Some(Side::White),
            'b' => Some(Side::Black),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl Kind {
    /// Pawns use a lower case letter, every other kind an upper case one.
    pub fn letter(self) -> char {
        match self {
            Kind::Pawn => 'p',
            Kind::Rook => 'R',
            Kind::Knight => 'N',
            Kind::Bishop => 'B',
            Kind::Queen => 'Q',
            Kind::King => 'K',
        }
    }

    pub fn from_letter(c: char) -> Option<Kind> {
        match c {
            'p' => Some(Kind::Pawn),
            'R' => Some(Kind::Rook),
            'N' => Some(Kind::Knight),
            'B' => Some(Kind::Bishop),
            'Q' => Some(Kind::Queen),
            'K' => Some(Kind::King),
            _ => None,
        }
    }
}

/// Two character piece identifier, e.g. `wp` or `bK`.
///
/// Used both as a board cell value and as the sprite catalog key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PieceCode {
    pub side: Side,
    pub kind: Kind,
}

impl PieceCode {
    pub const fn new(side: Side, kind: Kind) -> Self {
        Self { side, kind }
    }

    /// Sprite file name, `<code>.png`.
    pub fn file_name(&self) -> String {
        format!("{self}.png")
    }
}

impl fmt::Display for PieceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.side.prefix(), self.kind.letter())
    }
}

impl FromStr for PieceCode {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (side, kind, rest) = (chars.next(), chars.next(), chars.next());
        match (side.and_then(Side::from_prefix), kind.and_then(Kind::from_letter), rest) {
            (Some(side), Some(kind), None) => Ok(PieceCode { side, kind }),
            _ => Err(ResourceError::InvalidPieceCode(s.to_string())),
        }
    }
}

/// Every piece code the catalog knows about, white first.
pub const ALL_PIECES: [PieceCode; 12] = [
    PieceCode::new(Side::White, Kind::Pawn),
    PieceCode::new(Side::White, Kind::Rook),
    PieceCode::new(Side::White, Kind::Knight),
    PieceCode::new(Side::White, Kind::Bishop),
    PieceCode::new(Side::White, Kind::Queen),
    PieceCode::new(Side::White, Kind::King),
    PieceCode::new(Side::Black, Kind::Pawn),
    PieceCode::new(Side::Black, Kind::Rook),
    PieceCode::new(Side::Black, Kind::Knight),
    PieceCode::new(Side::Black, Kind::Bishop),
    PieceCode::new(Side::Black, Kind::Queen),
    PieceCode::new(Side::Black, Kind::King),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_print_as_two_letters() {
        let names: Vec<String> = ALL_PIECES.iter().map(|p| p.to_string()).collect();
        assert_eq!(
            names,
            ["wp", "wR", "wN", "wB", "wQ", "wK", "bp", "bR", "bN", "bB", "bQ", "bK"]
        );
    }

    #[test]
    fn every_code_parses_back() {
        for code in ALL_PIECES {
            assert_eq!(code.to_string().parse::<PieceCode>().unwrap(), code);
        }
    }

    #[test]
    fn rejects_malformed_codes() {
        for bad in ["", "w", "wk", "xK", "WK", "wKK", "--"] {
            assert!(
                matches!(bad.parse::<PieceCode>(), Err(ResourceError::InvalidPieceCode(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn file_name_uses_png_extension() {
        let king = PieceCode::new(Side::Black, Kind::King);
        assert_eq!(king.file_name(), "bK.png");
    }
}
