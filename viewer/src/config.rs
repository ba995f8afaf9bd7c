// Shared viewer constants.
use crate::error::ViewerError;
use backend::frame::Color;
use std::path::PathBuf;

pub const WINDOW_SIZE: usize = 512; // 400 works too
pub const DIMENSION: usize = 8;
pub const MAX_FPS: u32 = 15;
pub const IMAGE_DIR: &str = "images";
pub const TITLE: &str = "Chess";
pub const LIGHT_SQUARE: Color = Color::WHITE;
pub const DARK_SQUARE: Color = Color::GRAY;
pub const BACKGROUND: Color = Color::WHITE;

#[derive(Debug, Clone)]
pub struct Settings {
    pub window_size: usize,
    pub max_fps: u32,
    pub image_dir: PathBuf,
    pub title: String,
    /// Top left square gets the first color.
    pub square_colors: [Color; 2],
    pub background: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            max_fps: MAX_FPS,
            image_dir: PathBuf::from(IMAGE_DIR),
            title: TITLE.to_string(),
            square_colors: [LIGHT_SQUARE, DARK_SQUARE],
            background: BACKGROUND,
        }
    }
}

impl Settings {
    pub fn square_size(&self) -> usize {
        self.window_size / DIMENSION
    }

    pub fn validate(&self) -> Result<(), ViewerError> {
        if self.window_size == 0 || self.window_size % DIMENSION != 0 {
            return Err(ViewerError::Config(format!(
                "window size {} is not a positive multiple of {DIMENSION}",
                self.window_size
            )));
        }
        if self.max_fps == 0 {
            return Err(ViewerError::Config("max fps must be positive".to_string()));
        }
        Ok(())
    }
}
