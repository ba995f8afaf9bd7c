use crate::piece::PieceCode;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ResourceError {
    Io { path: PathBuf, source: io::Error },
    Decode { path: PathBuf, reason: String },
    /// Floating point (HDR) images can't be used as sprites.
    UnsupportedFormat { path: PathBuf },
    MissingSprite(PieceCode),
    InvalidPieceCode(String),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::Io { path, source } => write!(f, "reading {path:?} failure: {source}"),
            ResourceError::Decode { path, reason } => {
                write!(f, "loading image {path:?} error: {reason}")
            }
            ResourceError::UnsupportedFormat { path } => {
                write!(f, "image {path:?}: 32-bit float images not supported")
            }
            ResourceError::MissingSprite(code) => write!(f, "no sprite for piece {code}"),
            ResourceError::InvalidPieceCode(s) => write!(f, "invalid piece code {s:?}"),
        }
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResourceError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
