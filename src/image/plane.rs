//! Owned single-channel image in row-major layout (stride == width).
//!
//! Every intermediate of a frame pass (downsampled frame, emphasis image,
//! binarized image, masks, inpainted crops) lives in a `Plane`. Buffers are
//! allocated per frame and dropped with the frame's output.
use super::{ImageU16, ImageU8, ImageView};
use crate::error::TrackerError;
use crate::roi::PixelRect;

#[derive(Clone, Debug, PartialEq)]
pub struct Plane<T> {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order, `w * h` elements
    pub data: Vec<T>,
}

impl<T: Copy + Default> Plane<T> {
    /// Construct a default-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, T::default())
    }
}

impl<T: Copy> Plane<T> {
    pub fn filled(w: usize, h: usize, value: T) -> Self {
        Self {
            w,
            h,
            data: vec![value; w * h],
        }
    }

    pub fn from_vec(w: usize, h: usize, data: Vec<T>) -> Result<Self, TrackerError> {
        if data.len() != w * h {
            return Err(TrackerError::SizeMismatch {
                expected: w * h,
                actual: data.len(),
            });
        }
        Ok(Self { w, h, data })
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    /// Copy the pixels inside `rect` (clipped) into a new plane.
    pub fn crop(&self, rect: PixelRect) -> Plane<T> {
        let rect = rect.clip_to(self.w, self.h);
        let mut data = Vec::with_capacity(rect.area());
        for y in rect.y..rect.y + rect.height {
            let start = self.idx(rect.x, y);
            data.extend_from_slice(&self.data[start..start + rect.width]);
        }
        Plane {
            w: rect.width,
            h: rect.height,
            data,
        }
    }

    /// Apply `f` to every pixel, producing a plane of the same size.
    pub fn map<U, F: Fn(T) -> U>(&self, f: F) -> Plane<U> {
        Plane {
            w: self.w,
            h: self.h,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }
}

impl Plane<u8> {
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: &self.data,
        }
    }

    /// Copy a borrowed view into an owned, tightly packed plane.
    pub fn from_view(view: &ImageU8<'_>) -> Self {
        let mut data = Vec::with_capacity(view.w * view.h);
        for row in view.rows() {
            data.extend_from_slice(row);
        }
        Self {
            w: view.w,
            h: view.h,
            data,
        }
    }
}

impl Plane<u16> {
    pub fn as_view(&self) -> ImageU16<'_> {
        ImageU16 {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: &self.data,
        }
    }
}

impl<T: Copy> crate::image::traits::ImageView for Plane<T> {
    type Pixel = T;

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
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[T] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[T]> {
        Some(&self.data)
    }
}
