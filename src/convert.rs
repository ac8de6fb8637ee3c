//! Brightness windowing of raw 10-bit frames into 8-bit images.
//!
//! `out = clamp_u8(round(in * scale))`. With the default scale of `100/256`
//! the sensor's full 0–1023 range maps to roughly 0–400, so the dim iris and
//! pupil spread over the 8-bit range and the sclera saturates.
use crate::image::{ImageU16, ImageView, Plane};
use crate::parallel::for_each_row;

#[inline]
pub fn window_value(v: u16, scale: f32) -> u8 {
    (v as f32 * scale).round().clamp(0.0, 255.0) as u8
}

/// Window an entire 16-bit view into an owned 8-bit plane.
pub fn window_u16_to_u8(src: &ImageU16<'_>, scale: f32) -> Plane<u8> {
    let (w, h) = (src.width(), src.height());
    let mut out = Plane::new(w, h);
    for_each_row(&mut out.data, w, |y, dst| {
        for (d, &s) in dst.iter_mut().zip(src.row(y)) {
            *d = window_value(s, scale);
        }
    });
    out
}
