use crate::error::TrackerError;

/// Borrowed 16-bit single-channel raster, the form in which camera frames
/// arrive. Samples carry the sensor's 10-bit range (0–1023) in practice.
#[derive(Clone, Copy, Debug)]
pub struct ImageU16<'a> {
    pub w: usize,
    pub h: usize,
    /// Elements (not bytes) between row starts.
    pub stride: usize,
    pub data: &'a [u16],
}

impl<'a> ImageU16<'a> {
    /// Wrap a tightly packed buffer, checking its length.
    pub fn from_slice(w: usize, h: usize, data: &'a [u16]) -> Result<Self, TrackerError> {
        Self::with_stride(w, h, w, data)
    }

    pub fn with_stride(
        w: usize,
        h: usize,
        stride: usize,
        data: &'a [u16],
    ) -> Result<Self, TrackerError> {
        if w == 0 || h == 0 {
            return Err(TrackerError::InvalidDimensions {
                width: w,
                height: h,
            });
        }
        if stride < w {
            return Err(TrackerError::SizeMismatch {
                expected: w,
                actual: stride,
            });
        }
        let expected = stride * (h - 1) + w;
        if data.len() < expected {
            return Err(TrackerError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { w, h, stride, data })
    }
}

impl<'a> crate::image::traits::ImageView for ImageU16<'a> {
    type Pixel = u16;

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
    fn row(&self, y: usize) -> &[u16] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u16]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

#[cfg(test)]
mod tests {
    use super::ImageU16;
    use crate::error::TrackerError;
    use crate::image::ImageView;

    #[test]
    fn strided_rows_skip_padding() {
        let data = [1u16, 2, 3, 99, 4, 5, 6];
        let img = ImageU16::with_stride(3, 2, 4, &data).expect("valid view");
        assert_eq!(img.row(0), &[1, 2, 3]);
        assert_eq!(img.row(1), &[4, 5, 6]);
        assert!(img.as_slice().is_none());
    }

    #[test]
    fn short_buffer_is_rejected() {
        let data = [0u16; 5];
        let err = ImageU16::from_slice(3, 2, &data).unwrap_err();
        assert_eq!(
            err,
            TrackerError::SizeMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let err = ImageU16::from_slice(0, 4, &[]).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidDimensions { .. }));
    }
}
