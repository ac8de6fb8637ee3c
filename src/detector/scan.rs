//! Row-major candidate scan with blob separation and intensity rejection.
use super::params::{IntensityParams, IntensityWindow};
use crate::image::{ImageView, Plane};
use crate::integral::IntegralImage;
use crate::roi::PixelRect;
use crate::threshold::is_spike;
use crate::types::GlintCandidate;
use log::trace;

pub const MAX_GLINTS: usize = 2;

/// Sampling rectangle of the intensity filter for a candidate at `(x, y)`,
/// before clipping.
pub fn intensity_window_rect(x: usize, y: usize, window: &IntensityWindow) -> (i64, i64, i64, i64) {
    let x0 = x as i64 - window.left as i64;
    let y0 = y as i64 - window.above as i64;
    let width = (window.left + window.right + 1) as i64;
    let height = (window.above + window.below) as i64;
    (x0, y0, width, height)
}

/// Mean raw intensity around a candidate, or `None` when the clipped window
/// is empty (e.g. a spike on the top row with `below = 0`).
pub fn local_intensity(
    integral: &IntegralImage,
    x: usize,
    y: usize,
    window: &IntensityWindow,
) -> Option<f32> {
    let (x0, y0, width, height) = intensity_window_rect(x, y, window);
    let rect = PixelRect::clipped(
        x0,
        y0,
        width,
        height,
        integral.width(),
        integral.height(),
    );
    integral.mean(rect)
}

/// Scan the binarized image for up to [`MAX_GLINTS`] accepted candidates.
///
/// Spike pixels within `separation_px` (in x) of the first accepted candidate
/// are treated as the same blob. Every other spike pixel is promoted only if
/// its surrounding raw intensity exceeds `intensity.floor`.
pub fn scan_candidates(
    binarized: &Plane<u8>,
    integral: &IntegralImage,
    separation_px: usize,
    intensity: &IntensityParams,
) -> Vec<GlintCandidate> {
    let mut accepted: Vec<GlintCandidate> = Vec::with_capacity(MAX_GLINTS);
    let mut rejected = 0usize;
    'rows: for (y, row) in binarized.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            if !is_spike(v) {
                continue;
            }
            if let Some(first) = accepted.first() {
                if x.abs_diff(first.x) <= separation_px {
                    continue;
                }
            }
            let score = local_intensity(integral, x, y, &intensity.window);
            match score {
                Some(score) if score > intensity.floor => {
                    trace!("scan: accepted ({x},{y}) score={score:.1}");
                    accepted.push(GlintCandidate { x, y, score });
                    if accepted.len() == MAX_GLINTS {
                        break 'rows;
                    }
                }
                _ => rejected += 1,
            }
        }
    }
    if rejected > 0 {
        trace!("scan: {rejected} spike pixels rejected by intensity floor");
    }
    accepted
}
