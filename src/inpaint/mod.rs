//! Glint removal for eye regions.
//!
//! For each projected [`EyeRegion`] the masker
//! 1. cuts the binarized image at the downsampled rectangle and inverts it,
//! 2. dilates the result with a small square,
//! 3. upsamples it (nearest) to the full-resolution rectangle, and
//! 4. inpaints the brightness-windowed full-resolution crop under the mask.
//!
//! The inpainted crop is what the ellipse fitter sees: the bright corneal
//! reflection would otherwise cut into the pupil edge.
pub mod mask;
pub mod telea;

use crate::detector::params::MaskParams;
use crate::image::Plane;
use crate::types::EyeRegion;
use log::debug;

pub use mask::build_glint_mask;
pub use telea::inpaint_telea;

/// Prepared eye crop handed to the ellipse fitter.
#[derive(Clone, Debug)]
pub struct EyeImage {
    /// Position in x order among this frame's glints (0 = leftmost).
    pub index: usize,
    pub region: EyeRegion,
    /// Brightness-windowed full-resolution crop with glints inpainted.
    pub image: Plane<u8>,
    /// Mask that was filled, same size as `image`.
    pub mask: Plane<u8>,
    /// Number of pixels the inpainter filled.
    pub filled: usize,
}

impl EyeImage {
    pub fn label(&self) -> String {
        format!("eye{}", self.index)
    }
}

pub struct GlintMasker<'p> {
    params: &'p MaskParams,
}

impl<'p> GlintMasker<'p> {
    pub fn new(params: &'p MaskParams) -> Self {
        Self { params }
    }

    /// Build the glint-free crop for one eye, or `None` when the region (or
    /// the mask derived from it) has zero area.
    pub fn prepare(
        &self,
        index: usize,
        region: &EyeRegion,
        binarized: &Plane<u8>,
        windowed: &Plane<u8>,
    ) -> Option<EyeImage> {
        if region.is_degenerate() {
            debug!("GlintMasker: eye{index} region is degenerate, skipped");
            return None;
        }
        let mut image = Plane::from_view(&windowed.as_view().subview(region.full));
        if image.w == 0 || image.h == 0 {
            debug!("GlintMasker: eye{index} crop is empty, skipped");
            return None;
        }
        let Some(mask) = build_glint_mask(
            binarized,
            region.small,
            image.w,
            image.h,
            self.params.dilate_size,
        ) else {
            debug!("GlintMasker: eye{index} mask is empty, skipped");
            return None;
        };
        let filled = match inpaint_telea(&mut image, &mask, self.params.inpaint_radius) {
            Ok(n) => n,
            Err(err) => {
                debug!("GlintMasker: eye{index} inpaint failed: {err}");
                return None;
            }
        };
        debug!(
            "GlintMasker: eye{index} {}x{} filled={filled}",
            image.w, image.h
        );
        Some(EyeImage {
            index,
            region: *region,
            image,
            mask,
            filled,
        })
    }
}
