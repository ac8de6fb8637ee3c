//! Centroid refinement of accepted candidates.
use crate::image::{ImageView, Plane};
use crate::roi::PixelRect;
use crate::threshold::is_spike;
use crate::types::{Glint, GlintCandidate};
use nalgebra::Point2;

/// Replace a candidate by the centroid of all spike pixels within
/// `half_extent` of it (clipped to the image).
///
/// Returns `None` when the window holds no spike pixels; such a candidate
/// carries no usable coordinate and is dropped by the caller.
pub fn refine_candidate(
    binarized: &Plane<u8>,
    candidate: &GlintCandidate,
    half_extent: usize,
) -> Option<Glint> {
    let side = 2 * half_extent as i64 + 1;
    let window = PixelRect::clipped(
        candidate.x as i64 - half_extent as i64,
        candidate.y as i64 - half_extent as i64,
        side,
        side,
        binarized.w,
        binarized.h,
    );
    if window.is_empty() {
        return None;
    }

    let mut sum_x = 0u64;
    let mut sum_y = 0u64;
    let mut count = 0usize;
    for y in window.y..window.y_end() {
        let row = &binarized.row(y)[window.x..window.x_end()];
        for (dx, &v) in row.iter().enumerate() {
            if !is_spike(v) {
                continue;
            }
            sum_x += (window.x + dx) as u64;
            sum_y += y as u64;
            count += 1;
        }
    }
    if count == 0 {
        return None;
    }

    let n = count as f64;
    Some(Glint {
        position: Point2::new((sum_x as f64 / n) as f32, (sum_y as f64 / n) as f32),
        seed: (candidate.x, candidate.y),
        score: candidate.score,
        support: count,
    })
}

#[cfg(test)]
mod tests {
    use super::refine_candidate;
    use crate::image::Plane;
    use crate::threshold::{BACKGROUND, SPIKE};
    use crate::types::GlintCandidate;
    use approx::assert_abs_diff_eq;

    fn candidate(x: usize, y: usize) -> GlintCandidate {
        GlintCandidate { x, y, score: 500.0 }
    }

    #[test]
    fn centroid_of_square_blob() {
        let mut bin = Plane::filled(40, 40, BACKGROUND);
        for y in 10..13 {
            for x in 20..24 {
                bin.data[y * 40 + x] = SPIKE;
            }
        }
        let g = refine_candidate(&bin, &candidate(20, 10), 5).expect("refined glint");
        assert_abs_diff_eq!(g.position.x, 21.5, epsilon = 1e-5);
        assert_abs_diff_eq!(g.position.y, 11.0, epsilon = 1e-5);
        assert_eq!(g.support, 12);
        assert_eq!(g.seed, (20, 10));
    }

    #[test]
    fn window_is_clipped_at_borders() {
        let mut bin = Plane::filled(10, 10, BACKGROUND);
        bin.data[0] = SPIKE;
        bin.data[1] = SPIKE;
        let g = refine_candidate(&bin, &candidate(0, 0), 100).expect("refined glint");
        assert_abs_diff_eq!(g.position.x, 0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(g.position.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn empty_window_yields_none() {
        let bin = Plane::filled(10, 10, BACKGROUND);
        assert!(refine_candidate(&bin, &candidate(5, 5), 3).is_none());
    }
}
