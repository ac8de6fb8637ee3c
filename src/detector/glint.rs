//! Glint detector: binarize → scan → intensity filter → refine → order.
//!
//! Typical usage:
//! ```no_run
//! use glint_tracker::detector::{GlintDetector, GlintParams};
//! use glint_tracker::image::Plane;
//!
//! # fn example(gradient: Plane<u8>, raw: Plane<u16>) {
//! let params = GlintParams::default();
//! let detection = GlintDetector::new(&params)
//!     .detect(&gradient, &raw)
//!     .expect("matching dimensions");
//! for g in &detection.glints {
//!     println!("glint at ({:.1}, {:.1})", g.position.x, g.position.y);
//! }
//! # }
//! ```
use super::params::GlintParams;
use super::refine::refine_candidate;
use super::scan::{scan_candidates, MAX_GLINTS};
use crate::error::TrackerError;
use crate::image::Plane;
use crate::integral::IntegralImage;
use crate::threshold::adaptive_threshold_mean;
use crate::types::{Glint, GlintCandidate};
use log::debug;

/// Everything the detector produced for one frame.
#[derive(Clone, Debug)]
pub struct GlintDetection {
    /// Binarized emphasis image (`SPIKE` = 0, `BACKGROUND` = 255).
    pub binarized: Plane<u8>,
    /// Accepted candidates in scan order.
    pub candidates: Vec<GlintCandidate>,
    /// Refined glints sorted ascending by x; at most two.
    pub glints: Vec<Glint>,
}

pub struct GlintDetector<'p> {
    params: &'p GlintParams,
}

impl<'p> GlintDetector<'p> {
    pub fn new(params: &'p GlintParams) -> Self {
        Self { params }
    }

    /// Run detection on the emphasis image and the raw downsampled frame it
    /// was computed from. Both must have identical dimensions.
    pub fn detect(
        &self,
        gradient: &Plane<u8>,
        raw: &Plane<u16>,
    ) -> Result<GlintDetection, TrackerError> {
        if (gradient.w, gradient.h) != (raw.w, raw.h) {
            return Err(TrackerError::FrameSizeMismatch {
                expected: (raw.w, raw.h),
                actual: (gradient.w, gradient.h),
            });
        }
        let p = self.params;
        let binarized = adaptive_threshold_mean(gradient, &p.threshold);
        let integral = IntegralImage::from_u16(raw);
        let candidates = scan_candidates(&binarized, &integral, p.separation_px, &p.intensity);

        let mut glints: Vec<Glint> = candidates
            .iter()
            .filter_map(|c| refine_candidate(&binarized, c, p.refine_half_extent))
            .collect();
        glints.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
        debug_assert!(glints.len() <= MAX_GLINTS);

        debug!(
            "GlintDetector::detect candidates={} glints={}",
            candidates.len(),
            glints.len()
        );
        Ok(GlintDetection {
            binarized,
            candidates,
            glints,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::GlintDetector;
    use crate::detector::params::GlintParams;
    use crate::error::TrackerError;
    use crate::image::Plane;
    use crate::kernel::{ContrastKernel, KernelParams};

    fn raw_with_spikes(w: usize, h: usize, bg: u16, spikes: &[(usize, usize)]) -> Plane<u16> {
        let mut raw = Plane::filled(w, h, bg);
        for &(cx, cy) in spikes {
            for y in cy - 1..=cy + 1 {
                for x in cx - 1..=cx + 1 {
                    raw.data[y * w + x] = 1023;
                }
            }
        }
        raw
    }

    fn detect(raw: &Plane<u16>, params: &GlintParams) -> Vec<(f32, f32)> {
        let kernel = ContrastKernel::new(KernelParams::default()).expect("kernel");
        let gradient = kernel.apply(&raw.as_view()).expect("gradient");
        GlintDetector::new(params)
            .detect(&gradient, raw)
            .expect("detection")
            .glints
            .iter()
            .map(|g| (g.position.x, g.position.y))
            .collect()
    }

    fn params() -> GlintParams {
        let mut p = GlintParams::default();
        p.threshold.bias = -5;
        p
    }

    #[test]
    fn output_is_sorted_by_x_regardless_of_scan_order() {
        // The right spike is higher in the image and is scanned first.
        let raw = raw_with_spikes(320, 120, 400, &[(250, 40), (50, 60)]);
        let found = detect(&raw, &params());
        assert_eq!(found.len(), 2);
        assert!(found[0].0 < found[1].0);
        assert!((found[0].0 - 50.0).abs() <= 1.0);
        assert!((found[1].0 - 250.0).abs() <= 1.0);
    }

    #[test]
    fn never_more_than_two_glints() {
        let raw = raw_with_spikes(
            520,
            120,
            400,
            &[(30, 50), (160, 50), (290, 50), (420, 50)],
        );
        let found = detect(&raw, &params());
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn mismatched_inputs_fail_fast() {
        let gradient = Plane::<u8>::new(10, 10);
        let raw = Plane::<u16>::new(12, 10);
        let p = GlintParams::default();
        let err = GlintDetector::new(&p).detect(&gradient, &raw).unwrap_err();
        assert!(matches!(err, TrackerError::FrameSizeMismatch { .. }));
    }
}
