#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod tracker;
pub mod tuning;
pub mod types;

// Stage modules – public so tools and benches can run them in isolation.
pub mod config;
pub mod convert;
pub mod downsample;
pub mod ellipse;
pub mod inpaint;
pub mod integral;
pub mod kernel;
pub mod region;
pub mod roi;
pub mod threshold;
pub mod visualize;

mod parallel;

// --- High-level re-exports -------------------------------------------------

// Main entry points: tracker + results.
pub use crate::error::TrackerError;
pub use crate::tracker::{EyeTracker, FrameOutput, FrameStages, TrackerConfig};
pub use crate::tuning::{ParamsHandle, ParamsSnapshot};

// Parameters and per-frame results.
pub use crate::detector::{GlintDetector, GlintParams};
pub use crate::diagnostics::{EyeReport, FrameReport};
pub use crate::ellipse::{EllipseFitter, StarburstStub};
pub use crate::inpaint::EyeImage;
pub use crate::kernel::{ContrastKernel, KernelParams};
pub use crate::types::{Ellipse, EyeRegion, Glint, GlintCandidate};

// Display output.
pub use crate::visualize::compose_debug_image;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use glint_tracker::prelude::*;
///
/// # fn main() -> Result<(), TrackerError> {
/// let config = TrackerConfig::default();
/// let pixels = vec![0u16; config.width * config.height];
/// let frame = ImageU16::from_slice(config.width, config.height, &pixels)?;
///
/// let mut tracker = EyeTracker::new(&config)?;
/// let out = tracker.process_frame(frame)?;
/// println!("glints={} total_ms={:.3}", out.report.glints.len(), out.report.timing.total_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageU16, Plane};
    pub use crate::{EyeTracker, GlintParams, TrackerConfig, TrackerError};
}
