//! Summed-area table for constant-time rectangle means over the raw
//! downsampled frame.
use crate::image::{ImageView, Plane};
use crate::roi::PixelRect;

#[derive(Clone, Debug)]
pub struct IntegralImage {
    w: usize,
    h: usize,
    /// `(w + 1) × (h + 1)` table; entry `(x, y)` holds the sum of all pixels
    /// in `[0, x) × [0, y)`.
    sums: Vec<u64>,
}

impl IntegralImage {
    pub fn from_u16(src: &Plane<u16>) -> Self {
        let (w, h) = (src.w, src.h);
        let stride = w + 1;
        let mut sums = vec![0u64; stride * (h + 1)];
        for (y, row) in src.rows().enumerate() {
            let mut row_acc = 0u64;
            for (x, &v) in row.iter().enumerate() {
                row_acc += v as u64;
                sums[(y + 1) * stride + x + 1] = sums[y * stride + x + 1] + row_acc;
            }
        }
        Self { w, h, sums }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Sum over `rect`, clipped to the image.
    pub fn sum(&self, rect: PixelRect) -> u64 {
        let r = rect.clip_to(self.w, self.h);
        if r.is_empty() {
            return 0;
        }
        let stride = self.w + 1;
        let at = |x: usize, y: usize| self.sums[y * stride + x];
        at(r.x_end(), r.y_end()) + at(r.x, r.y) - at(r.x, r.y_end()) - at(r.x_end(), r.y)
    }

    /// Mean over `rect`, clipped to the image; `None` when nothing remains.
    pub fn mean(&self, rect: PixelRect) -> Option<f32> {
        let r = rect.clip_to(self.w, self.h);
        if r.is_empty() {
            return None;
        }
        Some((self.sum(r) as f64 / r.area() as f64) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::IntegralImage;
    use crate::image::Plane;
    use crate::roi::PixelRect;

    #[test]
    fn sums_match_direct_accumulation() {
        let (w, h) = (7usize, 5usize);
        let data: Vec<u16> = (0..(w * h) as u16).map(|v| v * 3 + 1).collect();
        let plane = Plane::from_vec(w, h, data.clone()).expect("plane");
        let ii = IntegralImage::from_u16(&plane);
        let rect = PixelRect::new(2, 1, 4, 3);
        let mut expected = 0u64;
        for y in 1..4 {
            for x in 2..6 {
                expected += data[y * w + x] as u64;
            }
        }
        assert_eq!(ii.sum(rect), expected);
        assert_eq!(ii.sum(PixelRect::new(0, 0, w, h)), data.iter().map(|&v| v as u64).sum::<u64>());
    }

    #[test]
    fn mean_clips_and_handles_empty() {
        let plane = Plane::filled(10, 10, 300u16);
        let ii = IntegralImage::from_u16(&plane);
        assert_eq!(ii.mean(PixelRect::new(8, 8, 20, 20)), Some(300.0));
        assert_eq!(ii.mean(PixelRect::new(3, 3, 0, 4)), None);
        assert_eq!(ii.mean(PixelRect::new(12, 0, 4, 4)), None);
    }
}
