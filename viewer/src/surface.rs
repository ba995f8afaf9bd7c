use backend::frame::{Color, Frame, Rect};
use resources::Image;

/// Whatever the painters draw on.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws `image` with its top left corner at the corner of `rect`.
    fn blit(&mut self, image: &Image, rect: Rect);
}

impl Surface for Frame {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        Frame::fill_rect(self, rect, color);
    }

    fn blit(&mut self, image: &Image, rect: Rect) {
        self.blit_rgba(rect.x, rect.y, image.width, image.height, &image.pixels);
    }
}
