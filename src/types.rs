use crate::roi::PixelRect;
use nalgebra::{Point2, Vector2};
use serde::Serialize;

/// Spike pixel accepted by the scan, in downsampled coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GlintCandidate {
    pub x: usize,
    pub y: usize,
    /// Mean raw intensity over the rejection window.
    pub score: f32,
}

/// Refined glint in downsampled coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Glint {
    /// Centroid of the spike pixels around the seed.
    pub position: Point2<f32>,
    /// Scan pixel that seeded the refinement.
    pub seed: (usize, usize),
    pub score: f32,
    /// Number of spike pixels contributing to the centroid.
    pub support: usize,
}

impl Glint {
    /// Position scaled to full-resolution frame coordinates.
    pub fn full_res_position(&self) -> Point2<f32> {
        Point2::new(self.position.x * 2.0, self.position.y * 2.0)
    }
}

/// Rectangles associated with one glint: the eye box in frame coordinates and
/// its half-size counterpart in downsampled coordinates. Both are clipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EyeRegion {
    pub full: PixelRect,
    pub small: PixelRect,
}

impl EyeRegion {
    pub fn is_degenerate(&self) -> bool {
        self.full.is_empty() || self.small.is_empty()
    }
}

/// Ellipse descriptor returned by the fitting collaborator, in frame
/// coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Ellipse {
    pub center: Point2<f32>,
    /// Semi-axes (major, minor).
    pub axes: Vector2<f32>,
    pub angle_rad: f32,
}
