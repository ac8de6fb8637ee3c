//! Glint detection on the half-resolution emphasis image.
//!
//! Overview
//! - Binarizes the emphasis image with an adaptive local-mean threshold
//!   (inverted polarity: glint spikes are `0`).
//! - Scans spike pixels row-major. Pixels horizontally close to the first
//!   accepted candidate belong to its blob and are skipped; others must pass
//!   a raw-intensity check over a window above the pixel before promotion.
//! - Refines each accepted candidate to the centroid of nearby spike pixels
//!   and returns at most two glints sorted by x.
//!
//! Modules
//! - [`params`] – live-tunable parameter set shared by all per-frame stages.
//! - [`scan`] – candidate scan and intensity rejection.
//! - [`refine`] – centroid refinement.
//! - `glint` – the [`GlintDetector`] orchestrating the above.

mod glint;
pub mod params;
pub mod refine;
pub mod scan;

pub use glint::{GlintDetection, GlintDetector};
pub use params::{
    DisplayParams, GlintParams, IntensityParams, IntensityWindow, MaskParams, RegionParams,
    ThresholdParams,
};
pub use scan::MAX_GLINTS;
