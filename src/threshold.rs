//! Adaptive local-mean binarization with inverted polarity.
//!
//! The output marks glint spikes with [`SPIKE`] (`0`) and everything else with
//! [`BACKGROUND`] (`255`). Scanning keys on `SPIKE`, and the masker inverts
//! the image to build its removal mask, so the polarity must not change.
//!
//! The local mean is a `block × block` box average with replicated borders,
//! rounded to the nearest integer. Sums are computed with separable running
//! windows: O(W·H) regardless of block size.
use crate::detector::params::{ThresholdParams, MAX_BLOCK_SIZE};
use crate::image::{ImageView, Plane};

pub const SPIKE: u8 = 0;
pub const BACKGROUND: u8 = 255;

#[inline]
pub fn is_spike(v: u8) -> bool {
    v == SPIKE
}

/// Binarize the emphasis image.
pub fn adaptive_threshold_mean(src: &Plane<u8>, params: &ThresholdParams) -> Plane<u8> {
    let (w, h) = (src.w, src.h);
    let mut out = Plane::filled(w, h, BACKGROUND);
    if w == 0 || h == 0 {
        return out;
    }
    debug_assert!(params.block_size % 2 == 1, "block size must be odd");
    debug_assert!(params.block_size <= MAX_BLOCK_SIZE, "block size too large");
    let radius = (params.block_size / 2) as isize;
    let area = (params.block_size * params.block_size) as u32;

    let hsum = horizontal_box_sums(src, radius);

    // Running column sums over rows [y - r, y + r] with replicated borders.
    let mut colsum = vec![0u32; w];
    for dy in -radius..=radius {
        let row = &hsum[clamp_index(dy, h) * w..][..w];
        for (acc, &v) in colsum.iter_mut().zip(row) {
            *acc += v;
        }
    }

    for y in 0..h {
        let src_row = src.row(y);
        let dst_row = &mut out.data[y * w..(y + 1) * w];
        for ((dst, &v), &sum) in dst_row.iter_mut().zip(src_row).zip(&colsum) {
            let mean = ((sum + area / 2) / area) as i32;
            if v as i32 > mean - params.bias {
                *dst = SPIKE;
            }
        }

        if y + 1 < h {
            let leaving = clamp_index(y as isize - radius, h);
            let entering = clamp_index(y as isize + radius + 1, h);
            let (out_row, in_row) = (&hsum[leaving * w..][..w], &hsum[entering * w..][..w]);
            for ((acc, &o), &i) in colsum.iter_mut().zip(out_row).zip(in_row) {
                *acc = *acc + i - o;
            }
        }
    }
    out
}

fn horizontal_box_sums(src: &Plane<u8>, radius: isize) -> Vec<u32> {
    let w = src.w;
    let mut sums = vec![0u32; w * src.h];
    for (row, dst) in src.rows().zip(sums.chunks_mut(w)) {
        let mut acc: u32 = (-radius..=radius)
            .map(|dx| row[clamp_index(dx, w)] as u32)
            .sum();
        for (x, out) in dst.iter_mut().enumerate() {
            *out = acc;
            let leaving = clamp_index(x as isize - radius, w);
            let entering = clamp_index(x as isize + radius + 1, w);
            acc = acc + row[entering] as u32 - row[leaving] as u32;
        }
    }
    sums
}

#[inline]
fn clamp_index(idx: isize, upper: usize) -> usize {
    idx.clamp(0, upper as isize - 1) as usize
}
