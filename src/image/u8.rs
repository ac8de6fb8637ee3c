use crate::roi::PixelRect;

/// Borrowed 8-bit single-channel view. Produced by [`crate::image::Plane::as_view`]
/// and by [`ImageU8::subview`] when a stage only needs a window of a larger
/// buffer.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Borrow the pixels inside `rect`. The rectangle is clipped to the view
    /// first, so a rectangle outside the image yields an empty view.
    pub fn subview(&self, rect: PixelRect) -> ImageU8<'a> {
        let rect = rect.clip_to(self.w, self.h);
        if rect.is_empty() {
            return ImageU8 {
                w: 0,
                h: 0,
                stride: self.stride,
                data: &[],
            };
        }
        let start = rect.y * self.stride + rect.x;
        ImageU8 {
            w: rect.width,
            h: rect.height,
            stride: self.stride,
            data: &self.data[start..],
        }
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}
