//! Piece sprites, loaded and scaled once before the first frame.

use crate::error::ResourceError;
use crate::image::Image;
use crate::piece::{PieceCode, ALL_PIECES};
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;

/// Immutable mapping from every piece code to a square sized sprite.
#[derive(Debug)]
pub struct Catalog {
    square_size: usize,
    sprites: HashMap<PieceCode, Image>,
}

impl Catalog {
    /// Loads `<dir>/<code>.png` for all twelve pieces. The first image that
    /// can't be read aborts the whole load.
    pub fn load(dir: &Path, square_size: usize) -> Result<Catalog, ResourceError> {
        info!("loading piece sprites from {dir:?}, square size {square_size}");
        let catalog = Self::build(square_size, |code| {
            let path = dir.join(code.file_name());
            let img = Image::load(&path)?;
            debug!("{path:?}: {} x {}", img.width, img.height);
            Ok(img)
        })?;
        info!("{} piece sprites ready", catalog.len());
        Ok(catalog)
    }

    /// Builds the catalog from an arbitrary image source. Whatever the source
    /// returns is scaled to `square_size` x `square_size`.
    pub fn build<F>(square_size: usize, mut source: F) -> Result<Catalog, ResourceError>
    where
        F: FnMut(PieceCode) -> Result<Image, ResourceError>,
    {
        let mut sprites = HashMap::with_capacity(ALL_PIECES.len());
        for code in ALL_PIECES {
            let img = source(code)?;
            sprites.insert(code, img.scaled(square_size, square_size));
        }
        Ok(Catalog {
            square_size,
            sprites,
        })
    }

    pub fn square_size(&self) -> usize {
        self.square_size
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn get(&self, code: PieceCode) -> Option<&Image> {
        self.sprites.get(&code)
    }

    /// Like [`Catalog::get`], but a miss is an error.
    pub fn sprite(&self, code: PieceCode) -> Result<&Image, ResourceError> {
        self.get(code).ok_or(ResourceError::MissingSprite(code))
    }

    /// Sprites in [`ALL_PIECES`] order.
    pub fn iter(&self) -> impl Iterator<Item = (PieceCode, &Image)> {
        ALL_PIECES
            .into_iter()
            .filter_map(move |code| self.sprites.get(&code).map(|img| (code, img)))
    }
}
