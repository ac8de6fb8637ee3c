//! Diagnostics data model returned with every processed frame.
//!
//! `FrameReport` is the serializable summary (glints, eye regions, parameter
//! version, per-stage timings); the pixel intermediates stay on
//! [`crate::tracker::FrameOutput`].

pub mod report;
pub mod timing;

pub use report::{EyeReport, FrameReport, InputDescriptor};
pub use timing::{StageTiming, TimingBreakdown};
