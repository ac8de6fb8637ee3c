use super::timing::TimingBreakdown;
use crate::roi::PixelRect;
use crate::types::{Ellipse, Glint, GlintCandidate};
use serde::Serialize;

/// Frame dimensions and the derived half-resolution working size.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub downsampled_width: usize,
    pub downsampled_height: usize,
}

/// Per-eye outcome of masking and fitting.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EyeReport {
    pub label: String,
    pub region: PixelRect,
    pub small_region: PixelRect,
    pub mask_pixels: usize,
    pub filled_pixels: usize,
    pub ellipse: Option<Ellipse>,
}

/// Serializable summary of one frame pass.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub input: InputDescriptor,
    /// Version of the parameter set the frame ran with.
    pub params_version: u64,
    pub candidates: Vec<GlintCandidate>,
    /// Downsampled coordinates, ascending x.
    pub glints: Vec<Glint>,
    pub eyes: Vec<EyeReport>,
    pub timing: TimingBreakdown,
}
