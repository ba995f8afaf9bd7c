use std::io::{self, Write};

#[repr(C, packed)]
#[derive(Debug, Copy, Clone)]
pub struct BmpFHEAD {
    pub bf_type: u16,
    pub bf_size: u32,
    pub bf_reserved: u32,
    pub bf_off_bits: u32,
}

impl BmpFHEAD {
    pub fn from(pixel_array_size: usize) -> Self {
        Self {
            bf_type: 0x4d42,
            bf_size: std::mem::size_of::<BmpFHEAD>() as u32
                + std::mem::size_of::<BmpIHEAD>() as u32
                + pixel_array_size as u32,
            bf_reserved: 0,
            bf_off_bits: std::mem::size_of::<BmpFHEAD>() as u32
                + std::mem::size_of::<BmpIHEAD>() as u32,
        }
    }

    fn to_le_bytes(self) -> Vec<u8> {
        let Self {
            bf_type,
            bf_size,
            bf_reserved,
            bf_off_bits,
        } = self;
        let mut out = Vec::with_capacity(std::mem::size_of::<Self>());
        out.extend_from_slice(&bf_type.to_le_bytes());
        out.extend_from_slice(&bf_size.to_le_bytes());
        out.extend_from_slice(&bf_reserved.to_le_bytes());
        out.extend_from_slice(&bf_off_bits.to_le_bytes());
        out
    }
}

#[repr(C, packed)]
#[derive(Debug, Copy, Clone)]
pub struct BmpIHEAD {
    pub bi_size: u32,
    pub bi_width: i32,
    pub bi_height: i32,
    pub bi_planes: u16,
    pub bi_bit_count: u16,
    pub bi_compression: u32,
    pub bi_size_image: u32,
    pub bi_x_pels_per_meter: i32,
    pub bi_y_pels_per_meter: i32,
    pub bi_clr_used: u32,
    pub bi_clr_important: u32,
}

impl BmpIHEAD {
    /// Negative height marks a top-down bitmap.
    pub fn from(width: usize, height: usize, pixel_array_size: usize) -> Self {
        Self {
            bi_size: std::mem::size_of::<BmpIHEAD>() as u32,
            bi_width: width as i32,
            bi_height: -(height as i32),
            bi_planes: 1,
            bi_bit_count: 24,
            bi_compression: 0,
            bi_size_image: pixel_array_size as u32,
            bi_x_pels_per_meter: 2835,
            bi_y_pels_per_meter: 2835,
            bi_clr_used: 0,
            bi_clr_important: 0,
        }
    }

    fn to_le_bytes(self) -> Vec<u8> {
        let Self {
            bi_size,
            bi_width,
            bi_height,
            bi_planes,
            bi_bit_count,
            bi_compression,
            bi_size_image,
            bi_x_pels_per_meter,
            bi_y_pels_per_meter,
            bi_clr_used,
            bi_clr_important,
        } = self;
        let mut out = Vec::with_capacity(std::mem::size_of::<Self>());
        out.extend_from_slice(&bi_size.to_le_bytes());
        out.extend_from_slice(&bi_width.to_le_bytes());
        out.extend_from_slice(&bi_height.to_le_bytes());
        out.extend_from_slice(&bi_planes.to_le_bytes());
        out.extend_from_slice(&bi_bit_count.to_le_bytes());
        out.extend_from_slice(&bi_compression.to_le_bytes());
        out.extend_from_slice(&bi_size_image.to_le_bytes());
        out.extend_from_slice(&bi_x_pels_per_meter.to_le_bytes());
        out.extend_from_slice(&bi_y_pels_per_meter.to_le_bytes());
        out.extend_from_slice(&bi_clr_used.to_le_bytes());
        out.extend_from_slice(&bi_clr_important.to_le_bytes());
        out
    }
}

/// 24-bit bitmap, pixels kept in BGR order.
pub struct BMP {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl BMP {
    /// Alpha is dropped.
    pub fn from_rgba(width: usize, height: usize, rgba: &[u8]) -> Self {
        let mut pixels = Vec::with_capacity(width * height * 3);
        for px in rgba.chunks_exact(4).take(width * height) {
            pixels.push(px[2]); // b
            pixels.push(px[1]); // g
            pixels.push(px[0]); // r
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let row_size = (3 * self.width + 3) & !3; // Row size must be padded to 4 bytes
        let pixel_array_size = row_size * self.height;
        let file_header = BmpFHEAD::from(pixel_array_size);
        let info_header = BmpIHEAD::from(self.width, self.height, pixel_array_size);

        out.write_all(&file_header.to_le_bytes())?;
        out.write_all(&info_header.to_le_bytes())?;
        let padding = vec![0u8; row_size - self.width * 3];
        for y in 0..self.height {
            let start = y * self.width * 3;
            let end = start + self.width * 3;

            out.write_all(&self.pixels[start..end])?;
            out.write_all(&padding)?;
        }
        Ok(())
    }

    pub fn to_file(&self, filename: &std::path::Path) -> io::Result<()> {
        let mut file = io::BufWriter::new(std::fs::File::create(filename)?);
        self.write_to(&mut file)?;
        file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_have_on_disk_sizes() {
        assert_eq!(BmpFHEAD::from(0).to_le_bytes().len(), 14);
        assert_eq!(BmpIHEAD::from(1, 1, 0).to_le_bytes().len(), 40);
    }

    #[test]
    fn rows_are_padded_to_four_bytes() {
        // 3 pixels * 3 bytes = 9 bytes per row, padded to 12
        let rgba = [10u8, 20, 30, 255].repeat(6);
        let mut bytes = Vec::new();
        BMP::from_rgba(3, 2, &rgba).write_to(&mut bytes).unwrap();

        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(bytes.len(), 54 + 2 * 12);
        let file_size = u32::from_le_bytes([bytes[2], bytes[3], bytes[4], bytes[5]]);
        assert_eq!(file_size as usize, bytes.len());
        let height = i32::from_le_bytes([bytes[22], bytes[23], bytes[24], bytes[25]]);
        assert_eq!(height, -2);
        // first pixel in BGR order, then padding after the third
        assert_eq!(&bytes[54..57], &[30, 20, 10]);
        assert_eq!(&bytes[63..66], &[0, 0, 0]);
    }
}
