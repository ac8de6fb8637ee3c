//! Live-tunable parameter set for the per-frame pipeline.
//!
//! This module groups the knobs for adaptive binarization, candidate
//! separation, the intensity rejection window, centroid refinement, eye-region
//! projection and glint masking. A frame reads one consistent snapshot of
//! [`GlintParams`] at entry (see [`crate::tuning::ParamsHandle`]).
//!
//! Defaults target the reference 1536×1024 camera processed at half
//! resolution. Distances are in downsampled pixels unless noted otherwise.

use crate::error::TrackerError;
use serde::{Deserialize, Serialize};

/// Largest accepted binarization window; keeps the `u32` box sums far from
/// overflow.
pub const MAX_BLOCK_SIZE: usize = 255;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlintParams {
    pub threshold: ThresholdParams,
    /// Horizontal distance within which spike pixels belong to the first
    /// accepted candidate's blob.
    pub separation_px: usize,
    pub intensity: IntensityParams,
    /// Half extent of the centroid refinement window.
    pub refine_half_extent: usize,
    pub region: RegionParams,
    pub mask: MaskParams,
    pub display: DisplayParams,
}

impl Default for GlintParams {
    fn default() -> Self {
        Self {
            threshold: ThresholdParams::default(),
            separation_px: 100,
            intensity: IntensityParams::default(),
            refine_half_extent: 100,
            region: RegionParams::default(),
            mask: MaskParams::default(),
            display: DisplayParams::default(),
        }
    }
}

impl GlintParams {
    /// Reject values no stage could run with.
    pub fn validate(&self) -> Result<(), TrackerError> {
        let t = &self.threshold;
        if t.block_size < 3 || t.block_size % 2 == 0 || t.block_size > MAX_BLOCK_SIZE {
            return Err(invalid(format!(
                "threshold block_size must be odd and in 3..={MAX_BLOCK_SIZE}, got {}",
                t.block_size
            )));
        }
        if !self.intensity.floor.is_finite() {
            return Err(invalid("intensity floor must be finite".into()));
        }
        let w = &self.intensity.window;
        if w.above + w.below == 0 {
            return Err(invalid(
                "intensity window must span at least one row".into(),
            ));
        }
        if self.region.box_width < 2 || self.region.box_height < 2 {
            return Err(invalid(format!(
                "region box must be at least 2x2, got {}x{}",
                self.region.box_width, self.region.box_height
            )));
        }
        if self.mask.dilate_size == 0 {
            return Err(invalid("mask dilate_size must be positive".into()));
        }
        if self.mask.inpaint_radius == 0 {
            return Err(invalid("mask inpaint_radius must be positive".into()));
        }
        let scale = self.display.brightness_scale;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(invalid(format!(
                "display brightness_scale must be positive, got {scale}"
            )));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> TrackerError {
    TrackerError::InvalidParams(msg)
}

/// Adaptive local-mean binarization of the emphasis image.
///
/// A pixel is marked as a glint spike when it exceeds the rounded local mean
/// over a `block_size × block_size` window by more than `-bias`. The negative
/// default mirrors the usual "mean minus constant" convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdParams {
    pub block_size: usize,
    pub bias: i32,
}

impl Default for ThresholdParams {
    fn default() -> Self {
        Self {
            block_size: 11,
            bias: -40,
        }
    }
}

/// Raw-intensity rejection of candidates over dark surroundings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntensityParams {
    /// Minimum mean raw value (0–1023 scale) the window must exceed.
    pub floor: f32,
    pub window: IntensityWindow,
}

impl Default for IntensityParams {
    fn default() -> Self {
        Self {
            floor: 240.0,
            window: IntensityWindow::default(),
        }
    }
}

/// Shape of the sampling window relative to the candidate pixel.
///
/// Rows `[y - above, y + below)` and columns `[x - left, x + right]` are
/// averaged. With `below = 0` only rows strictly above the candidate count,
/// which samples the bright sclera/cornea over a true glint and the dark
/// hair or brow over a spurious one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntensityWindow {
    pub above: usize,
    pub below: usize,
    pub left: usize,
    pub right: usize,
}

impl Default for IntensityWindow {
    fn default() -> Self {
        Self {
            above: 80,
            below: 0,
            left: 80,
            right: 80,
        }
    }
}

/// Eye-region box in full-resolution pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionParams {
    pub box_width: usize,
    pub box_height: usize,
}

impl Default for RegionParams {
    fn default() -> Self {
        Self {
            box_width: 200,
            box_height: 160,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskParams {
    /// Side of the square structuring element used to grow the glint mask.
    pub dilate_size: usize,
    /// Neighbourhood radius of the inpainting fill.
    pub inpaint_radius: usize,
}

impl Default for MaskParams {
    fn default() -> Self {
        Self {
            dilate_size: 4,
            inpaint_radius: 4,
        }
    }
}

/// Brightness windowing of raw frames into 8-bit images.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayParams {
    pub brightness_scale: f32,
}

impl Default for DisplayParams {
    fn default() -> Self {
        Self {
            brightness_scale: 100.0 / 256.0,
        }
    }
}
