pub mod app;
pub mod board;
pub mod config;
pub mod error;
pub mod render;
pub mod surface;

pub use board::{Board, BoardSource, GameState};
pub use config::Settings;
pub use error::ViewerError;
