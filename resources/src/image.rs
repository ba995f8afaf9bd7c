use crate::error::ResourceError;
use std::path::Path;

/// 8-bit RGBA image, rows stored top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl Image {
    pub fn solid(width: usize, height: usize, rgba: [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity(width * height * 4);
        for _ in 0..width * height {
            pixels.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn load(filename: &Path) -> Result<Image, ResourceError> {
        let bytes = std::fs::read(filename).map_err(|source| ResourceError::Io {
            path: filename.to_path_buf(),
            source,
        })?;
        Self::decode(&bytes, filename)
    }

    /// Decodes any format stb_image understands. `origin` only names the
    /// data in error messages.
    pub fn decode(bytes: &[u8], origin: &Path) -> Result<Image, ResourceError> {
        unsafe {
            stb_image::stb_image::stbi_set_flip_vertically_on_load(0);
        }
        let img = match stb_image::image::load_from_memory_with_depth(bytes, 4, false) {
            stb_image::image::LoadResult::ImageF32(_) => {
                return Err(ResourceError::UnsupportedFormat {
                    path: origin.to_path_buf(),
                })
            }
            stb_image::image::LoadResult::ImageU8(img) => img,
            stb_image::image::LoadResult::Error(e) => {
                return Err(ResourceError::Decode {
                    path: origin.to_path_buf(),
                    reason: e,
                })
            }
        };
        let pixels = expand_to_rgba(img.depth, img.data).ok_or_else(|| ResourceError::Decode {
            path: origin.to_path_buf(),
            reason: format!("unexpected channel count {}", img.depth),
        })?;
        Ok(Image {
            width: img.width,
            height: img.height,
            pixels,
        })
    }

    /// Nearest neighbour resize.
    pub fn scaled(&self, width: usize, height: usize) -> Image {
        if width == self.width && height == self.height {
            return self.clone();
        }
        let mut pixels = Vec::with_capacity(width * height * 4);
        for y in 0..height {
            let sy = y * self.height / height;
            for x in 0..width {
                let sx = x * self.width / width;
                let at = (sy * self.width + sx) * 4;
                pixels.extend_from_slice(&self.pixels[at..at + 4]);
            }
        }
        Image {
            width,
            height,
            pixels,
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let at = (y * self.width + x) * 4;
        [
            self.pixels[at],
            self.pixels[at + 1],
            self.pixels[at + 2],
            self.pixels[at + 3],
        ]
    }
}

fn expand_to_rgba(depth: usize, data: Vec<u8>) -> Option<Vec<u8>> {
    let expand = |px: &[u8]| -> [u8; 4] {
        match px.len() {
            1 => [px[0], px[0], px[0], 255],
            2 => [px[0], px[0], px[0], px[1]],
            _ => [px[0], px[1], px[2], 255],
        }
    };
    match depth {
        4 => Some(data),
        1..=3 => Some(data.chunks_exact(depth).flat_map(expand).collect()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmp::BMP;

    fn checker(width: usize, height: usize) -> Vec<u8> {
        let mut rgba = Vec::new();
        for y in 0..height {
            for x in 0..width {
                if (x + y) % 2 == 0 {
                    rgba.extend_from_slice(&[200, 10, 20, 255]);
                } else {
                    rgba.extend_from_slice(&[0, 90, 250, 255]);
                }
            }
        }
        rgba
    }

    #[test]
    fn decodes_bmp_written_by_us() {
        let rgba = checker(5, 3);
        let mut bytes = Vec::new();
        BMP::from_rgba(5, 3, &rgba).write_to(&mut bytes).unwrap();

        let img = Image::decode(&bytes, Path::new("mem.bmp")).unwrap();
        assert_eq!((img.width, img.height), (5, 3));
        assert_eq!(img.pixels, rgba);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = Image::decode(b"definitely not an image", Path::new("junk.png")).unwrap_err();
        assert!(matches!(err, ResourceError::Decode { .. }));
        assert!(err.to_string().contains("junk.png"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Image::load(Path::new("/nonexistent/dir/wK.png")).unwrap_err();
        assert!(matches!(err, ResourceError::Io { .. }));
    }

    #[test]
    fn scaling_up_repeats_pixels() {
        let img = Image {
            width: 2,
            height: 1,
            pixels: vec![1, 1, 1, 255, 2, 2, 2, 255],
        };
        let big = img.scaled(4, 2);
        assert_eq!((big.width, big.height), (4, 2));
        assert_eq!(big.pixel(0, 0), [1, 1, 1, 255]);
        assert_eq!(big.pixel(1, 1), [1, 1, 1, 255]);
        assert_eq!(big.pixel(2, 0), [2, 2, 2, 255]);
        assert_eq!(big.pixel(3, 1), [2, 2, 2, 255]);
    }

    #[test]
    fn scaling_down_keeps_exact_size() {
        let img = Image::solid(150, 150, [9, 8, 7, 128]);
        let small = img.scaled(64, 64);
        assert_eq!(small.pixels.len(), 64 * 64 * 4);
        assert_eq!(small.pixel(63, 63), [9, 8, 7, 128]);
    }

    #[test]
    fn grey_and_rgb_expand_to_opaque_rgba() {
        assert_eq!(expand_to_rgba(1, vec![7]).unwrap(), vec![7, 7, 7, 255]);
        assert_eq!(expand_to_rgba(2, vec![7, 9]).unwrap(), vec![7, 7, 7, 9]);
        assert_eq!(expand_to_rgba(3, vec![1, 2, 3]).unwrap(), vec![1, 2, 3, 255]);
        assert!(expand_to_rgba(5, vec![0; 5]).is_none());
    }
}
