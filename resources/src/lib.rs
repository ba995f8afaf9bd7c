pub mod bmp;
pub mod catalog;
pub mod error;
pub mod image;
pub mod piece;

pub use catalog::Catalog;
pub use error::ResourceError;
pub use image::Image;
pub use piece::{Kind, PieceCode, Side, ALL_PIECES};
