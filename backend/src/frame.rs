#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(190, 190, 190);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// CPU side RGBA frame buffer, rows top to bottom. Every pixel is opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Frame {
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        let mut frame = Self {
            width,
            height,
            pixels: vec![255; width * height * 4],
        };
        frame.fill(background);
        frame
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Color {
        let at = (y * self.width + x) * 4;
        Color::rgb(self.pixels[at], self.pixels[at + 1], self.pixels[at + 2])
    }

    pub fn fill(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, 255]);
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        for y in y0..y1 {
            let row = y * self.width;
            for px in self.pixels[(row + x0) * 4..(row + x1) * 4].chunks_exact_mut(4) {
                px.copy_from_slice(&[color.r, color.g, color.b, 255]);
            }
        }
    }

    /// Draws a `w` x `h` RGBA image with its top left corner at (`x`, `y`),
    /// blending by the source alpha. Parts outside the frame are dropped.
    pub fn blit_rgba(&mut self, x: i32, y: i32, w: usize, h: usize, src: &[u8]) {
        debug_assert_eq!(src.len(), w * h * 4);
        let Some((x0, y0, x1, y1)) = self.clip(Rect::new(x, y, w as u32, h as u32)) else {
            return;
        };
        for dy in y0..y1 {
            let sy = (dy as i64 - y as i64) as usize;
            for dx in x0..x1 {
                let sx = (dx as i64 - x as i64) as usize;
                let s = &src[(sy * w + sx) * 4..(sy * w + sx) * 4 + 4];
                let d = (dy * self.width + dx) * 4;
                match s[3] {
                    0 => {}
                    255 => self.pixels[d..d + 3].copy_from_slice(&s[..3]),
                    a => {
                        for i in 0..3 {
                            self.pixels[d + i] = blend(s[i], self.pixels[d + i], a);
                        }
                    }
                }
            }
        }
    }

    /// Intersection of `rect` with the frame as pixel ranges.
    fn clip(&self, rect: Rect) -> Option<(usize, usize, usize, usize)> {
        let x0 = (rect.x as i64).clamp(0, self.width as i64);
        let y0 = (rect.y as i64).clamp(0, self.height as i64);
        let x1 = (rect.x as i64 + rect.w as i64).clamp(0, self.width as i64);
        let y1 = (rect.y as i64 + rect.h as i64).clamp(0, self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as usize, y0 as usize, x1 as usize, y1 as usize))
    }
}

fn blend(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8
}
