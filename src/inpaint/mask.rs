//! Glint mask construction: extract, invert, dilate, resize.
//!
//! Mask pixels are binary: [`MASK_SET`] marks pixels to be filled.
use crate::image::{ImageView, Plane};
use crate::roi::PixelRect;
use crate::threshold::is_spike;

pub const MASK_SET: u8 = 255;
pub const MASK_CLEAR: u8 = 0;

/// Crop the binarized image at `rect` and invert it, so glint spikes become
/// [`MASK_SET`].
pub fn extract_inverted(binarized: &Plane<u8>, rect: PixelRect) -> Plane<u8> {
    binarized
        .crop(rect)
        .map(|v| if is_spike(v) { MASK_SET } else { MASK_CLEAR })
}

/// Binary dilation with a `size × size` rectangle anchored at `size / 2`.
///
/// Output `(x, y)` is set when any input pixel in
/// `[x - a, x + size - 1 - a] × [y - a, y + size - 1 - a]` is set, with
/// `a = size / 2`. Neighbours outside the image are ignored. The rectangle is
/// separable, so rows and columns are dilated in two passes.
pub fn dilate_rect(src: &Plane<u8>, size: usize) -> Plane<u8> {
    let (w, h) = (src.w, src.h);
    if w == 0 || h == 0 || size <= 1 {
        return src.clone();
    }
    let anchor = size / 2;
    let reach_lo = anchor;
    let reach_hi = size - 1 - anchor;

    let mut horiz = Plane::filled(w, h, MASK_CLEAR);
    for y in 0..h {
        let row = src.row(y);
        let out = &mut horiz.data[y * w..(y + 1) * w];
        for (x, dst) in out.iter_mut().enumerate() {
            let lo = x.saturating_sub(reach_lo);
            let hi = (x + reach_hi).min(w - 1);
            if row[lo..=hi].iter().any(|&v| v != MASK_CLEAR) {
                *dst = MASK_SET;
            }
        }
    }

    let mut out = Plane::filled(w, h, MASK_CLEAR);
    for y in 0..h {
        let lo = y.saturating_sub(reach_lo);
        let hi = (y + reach_hi).min(h - 1);
        for x in 0..w {
            if (lo..=hi).any(|yy| horiz.data[yy * w + x] != MASK_CLEAR) {
                out.data[y * w + x] = MASK_SET;
            }
        }
    }
    out
}

/// Nearest-neighbour resize to `dst_w × dst_h`.
pub fn resize_nearest(src: &Plane<u8>, dst_w: usize, dst_h: usize) -> Plane<u8> {
    let mut out = Plane::filled(dst_w, dst_h, MASK_CLEAR);
    if src.w == 0 || src.h == 0 || dst_w == 0 || dst_h == 0 {
        return out;
    }
    let xs: Vec<usize> = (0..dst_w).map(|x| (x * src.w / dst_w).min(src.w - 1)).collect();
    for y in 0..dst_h {
        let sy = (y * src.h / dst_h).min(src.h - 1);
        let src_row = src.row(sy);
        let dst_row = &mut out.data[y * dst_w..(y + 1) * dst_w];
        for (dst, &sx) in dst_row.iter_mut().zip(&xs) {
            *dst = src_row[sx];
        }
    }
    out
}

/// Full mask pipeline for one eye. Returns `None` when the small rectangle
/// is empty or the target size is zero.
pub fn build_glint_mask(
    binarized: &Plane<u8>,
    small: PixelRect,
    full_w: usize,
    full_h: usize,
    dilate_size: usize,
) -> Option<Plane<u8>> {
    let small = small.clip_to(binarized.w, binarized.h);
    if small.is_empty() || full_w == 0 || full_h == 0 {
        return None;
    }
    let inverted = extract_inverted(binarized, small);
    let dilated = dilate_rect(&inverted, dilate_size);
    Some(resize_nearest(&dilated, full_w, full_h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::threshold::{BACKGROUND, SPIKE};

    fn single(w: usize, h: usize, x: usize, y: usize) -> Plane<u8> {
        let mut p = Plane::filled(w, h, MASK_CLEAR);
        p.data[y * w + x] = MASK_SET;
        p
    }

    fn set_pixels(p: &Plane<u8>) -> Vec<(usize, usize)> {
        (0..p.h)
            .flat_map(|y| (0..p.w).map(move |x| (x, y)))
            .filter(|&(x, y)| p.data[y * p.w + x] == MASK_SET)
            .collect()
    }

    #[test]
    fn inversion_marks_spikes() {
        let mut bin = Plane::filled(6, 4, BACKGROUND);
        let i = bin.idx(3, 2);
        bin.data[i] = SPIKE;
        let m = extract_inverted(&bin, PixelRect::new(2, 1, 3, 3));
        assert_eq!((m.w, m.h), (3, 3));
        assert_eq!(set_pixels(&m), vec![(1, 1)]);
    }

    #[test]
    fn dilation_by_four_is_asymmetric_around_anchor() {
        // Anchor 2: a set pixel at x spreads to [x - 1, x + 2].
        let out = dilate_rect(&single(10, 10, 5, 5), 4);
        let px = set_pixels(&out);
        assert_eq!(px.len(), 16);
        assert!(px.contains(&(4, 4)));
        assert!(px.contains(&(7, 7)));
        assert!(!px.contains(&(3, 5)));
        assert!(!px.contains(&(8, 5)));
    }

    #[test]
    fn dilation_ignores_outside_pixels() {
        let out = dilate_rect(&single(4, 4, 0, 0), 4);
        let expected: Vec<(usize, usize)> =
            (0..3).flat_map(|y| (0..3).map(move |x| (x, y))).collect();
        assert_eq!(set_pixels(&out), expected);
    }

    #[test]
    fn nearest_resize_doubles_blocks() {
        let out = resize_nearest(&single(3, 2, 1, 1), 6, 4);
        assert_eq!(set_pixels(&out), vec![(2, 2), (3, 2), (2, 3), (3, 3)]);
    }

    #[test]
    fn empty_region_has_no_mask() {
        let bin = Plane::filled(8, 8, BACKGROUND);
        assert!(build_glint_mask(&bin, PixelRect::new(8, 0, 0, 4), 10, 10, 4).is_none());
        assert!(build_glint_mask(&bin, PixelRect::new(0, 0, 4, 4), 0, 8, 4).is_none());
    }
}
