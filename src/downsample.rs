//! 2×2 mean decimation of raw 16-bit frames.
//!
//! Drop-odd policy: output size is `(w / 2, h / 2)`; a trailing odd column or
//! row is ignored. Each destination pixel is the rounded mean
//! `(a + b + c + d + 2) / 4` of one non-overlapping source block, so glint
//! coordinates found at half resolution map back to full resolution by a
//! plain factor of two.
use crate::image::{ImageU16, ImageView, Plane};
use crate::parallel::for_each_row;

#[inline]
pub fn half_dims(w: usize, h: usize) -> (usize, usize) {
    (w / 2, h / 2)
}

/// Downsample a frame by two along each axis.
pub fn downsample2x2_mean_u16(src: &ImageU16<'_>) -> Plane<u16> {
    let (dst_w, dst_h) = half_dims(src.width(), src.height());
    let mut dst = Plane::new(dst_w, dst_h);
    if dst_w == 0 || dst_h == 0 {
        return dst;
    }
    for_each_row(&mut dst.data, dst_w, |y, dst_row| {
        let src_row0 = src.row(2 * y);
        let src_row1 = src.row(2 * y + 1);
        let pairs0 = src_row0.chunks_exact(2);
        let pairs1 = src_row1.chunks_exact(2);
        for ((out, p0), p1) in dst_row.iter_mut().zip(pairs0).zip(pairs1) {
            let sum = p0[0] as u32 + p0[1] as u32 + p1[0] as u32 + p1[1] as u32;
            *out = ((sum + 2) / 4) as u16;
        }
    });
    dst
}
