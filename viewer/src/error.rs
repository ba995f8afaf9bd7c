use resources::ResourceError;
use std::fmt;

#[derive(Debug)]
pub enum ViewerError {
    Config(String),
    Board(String),
    Resource(ResourceError),
    /// Window system or OpenGL failure.
    Backend(String),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::Config(msg) => write!(f, "invalid settings: {msg}"),
            ViewerError::Board(msg) => write!(f, "invalid board: {msg}"),
            ViewerError::Resource(e) => write!(f, "{e}"),
            ViewerError::Backend(msg) => write!(f, "backend failure: {msg}"),
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewerError::Resource(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ResourceError> for ViewerError {
    fn from(e: ResourceError) -> Self {
        ViewerError::Resource(e)
    }
}
