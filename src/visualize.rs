//! Debug composition of a processed frame.
//!
//! The red channel carries the brightness-windowed frame. Green and blue
//! carry the same frame with binarized spike pixels knocked out, so detected
//! glint spikes read as pure red. Refined glints are drawn as crosses and the
//! eye regions as rectangle outlines.
use crate::image::{ImageView, Plane};
use crate::roi::PixelRect;
use crate::tracker::FrameOutput;
use image::{Rgb, RgbImage};

const GLINT_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const REGION_COLOR: Rgb<u8> = Rgb([255, 255, 0]);
const MARKER_ARM: i64 = 6;

/// Compose the red/knockout image of `windowed` and `binarized`.
///
/// `binarized` is half the size of `windowed`; each full-resolution pixel
/// samples the binarized pixel at `(x / 2, y / 2)`.
pub fn compose_knockout(windowed: &Plane<u8>, binarized: &Plane<u8>) -> RgbImage {
    let mut rgb = RgbImage::new(windowed.w as u32, windowed.h as u32);
    for (y, row) in windowed.rows().enumerate() {
        let by = (y / 2).min(binarized.h.saturating_sub(1));
        for (x, &r) in row.iter().enumerate() {
            let bx = (x / 2).min(binarized.w.saturating_sub(1));
            let b = if binarized.w == 0 || binarized.h == 0 {
                u8::MAX
            } else {
                binarized.get(bx, by)
            };
            let gb = r.min(b);
            rgb.put_pixel(x as u32, y as u32, Rgb([r, gb, gb]));
        }
    }
    rgb
}

/// Full debug view of a frame: knockout image plus overlays.
pub fn compose_debug_image(output: &FrameOutput) -> RgbImage {
    let mut rgb = compose_knockout(&output.stages.windowed, &output.stages.binarized);
    for eye in &output.report.eyes {
        draw_rect(&mut rgb, eye.region, REGION_COLOR);
    }
    for glint in &output.report.glints {
        let p = glint.full_res_position();
        draw_cross(&mut rgb, p.x, p.y, GLINT_COLOR);
    }
    rgb
}

fn put_checked(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    img.put_pixel(x as u32, y as u32, color);
}

fn draw_cross(img: &mut RgbImage, x: f32, y: f32, color: Rgb<u8>) {
    if !x.is_finite() || !y.is_finite() {
        return;
    }
    let (xi, yi) = (x.round() as i64, y.round() as i64);
    for d in -MARKER_ARM..=MARKER_ARM {
        put_checked(img, xi + d, yi, color);
        put_checked(img, xi, yi + d, color);
    }
}

fn draw_rect(img: &mut RgbImage, rect: PixelRect, color: Rgb<u8>) {
    if rect.is_empty() {
        return;
    }
    let (x0, y0) = (rect.x as i64, rect.y as i64);
    let (x1, y1) = (rect.x_end() as i64 - 1, rect.y_end() as i64 - 1);
    for x in x0..=x1 {
        put_checked(img, x, y0, color);
        put_checked(img, x, y1, color);
    }
    for y in y0..=y1 {
        put_checked(img, x0, y, color);
        put_checked(img, x1, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::{compose_knockout, draw_cross, draw_rect};
    use crate::image::Plane;
    use crate::roi::PixelRect;
    use crate::threshold::{BACKGROUND, SPIKE};
    use image::{Rgb, RgbImage};

    #[test]
    fn spikes_are_knocked_out_of_green_and_blue() {
        let windowed = Plane::filled(4, 4, 200u8);
        let mut bin = Plane::filled(2, 2, BACKGROUND);
        bin.data[3] = SPIKE;
        let rgb = compose_knockout(&windowed, &bin);
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([200, 200, 200]));
        assert_eq!(rgb.get_pixel(3, 3), &Rgb([200, 0, 0]));
        assert_eq!(rgb.get_pixel(2, 2), &Rgb([200, 0, 0]));
    }

    #[test]
    fn overlays_clip_at_image_border() {
        let mut img = RgbImage::new(10, 10);
        draw_cross(&mut img, 0.0, 0.0, Rgb([0, 255, 0]));
        draw_rect(&mut img, PixelRect::new(5, 5, 10, 10), Rgb([255, 255, 0]));
        assert_eq!(img.get_pixel(6, 0), &Rgb([0, 255, 0]));
        assert_eq!(img.get_pixel(5, 9), &Rgb([255, 255, 0]));
    }
}
