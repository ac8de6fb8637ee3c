//! Top-level per-frame context.
//!
//! [`EyeTracker`] owns everything that outlives a frame: the contrast kernel
//! (built once), the live parameter handle, the ellipse-fit collaborator and
//! the expected frame size. [`EyeTracker::process_frame`] runs
//! downsample → contrast → detect → project → mask/inpaint → fit and returns
//! a [`FrameOutput`] that owns every intermediate of that frame.
//!
//! ```no_run
//! use glint_tracker::image::ImageU16;
//! use glint_tracker::{EyeTracker, TrackerConfig};
//!
//! # fn example(pixels: &[u16]) -> Result<(), glint_tracker::TrackerError> {
//! let config = TrackerConfig::default();
//! let mut tracker = EyeTracker::new(&config)?;
//! let tuning = tracker.params_handle();
//! tuning.update(|p| p.intensity.floor = 200.0)?;
//!
//! let frame = ImageU16::from_slice(config.width, config.height, pixels)?;
//! let out = tracker.process_frame(frame)?;
//! println!("{} glints", out.report.glints.len());
//! # Ok(())
//! # }
//! ```
use crate::convert::window_u16_to_u8;
use crate::detector::params::GlintParams;
use crate::detector::GlintDetector;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{EyeReport, FrameReport, InputDescriptor, TimingBreakdown};
use crate::downsample::{downsample2x2_mean_u16, half_dims};
use crate::ellipse::{EllipseFitter, StarburstStub};
use crate::error::TrackerError;
use crate::image::{ImageU16, ImageView, Plane};
use crate::inpaint::mask::MASK_SET;
use crate::inpaint::{EyeImage, GlintMasker};
use crate::kernel::{ContrastKernel, KernelParams};
use crate::region::RegionProjector;
use crate::tuning::ParamsHandle;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Construction-time configuration of an [`EyeTracker`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Full-resolution frame width.
    pub width: usize,
    /// Full-resolution frame height.
    pub height: usize,
    pub kernel: KernelParams,
    /// Initial live parameters.
    pub params: GlintParams,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            width: 1536,
            height: 1024,
            kernel: KernelParams::default(),
            params: GlintParams::default(),
        }
    }
}

/// Pixel intermediates of one frame pass.
#[derive(Clone, Debug)]
pub struct FrameStages {
    /// Half-resolution raw frame.
    pub downsampled: Plane<u16>,
    /// Contrast-emphasis image.
    pub gradient: Plane<u8>,
    /// Binarized emphasis image (`SPIKE` = 0).
    pub binarized: Plane<u8>,
    /// Brightness-windowed full-resolution frame.
    pub windowed: Plane<u8>,
}

/// Everything produced for one frame.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub report: FrameReport,
    /// Prepared eye crops, in glint x order. Eyes whose region was degenerate
    /// are absent.
    pub eyes: Vec<EyeImage>,
    pub stages: FrameStages,
}

pub struct EyeTracker<F: EllipseFitter = StarburstStub> {
    kernel: ContrastKernel,
    params: ParamsHandle,
    fitter: F,
    width: usize,
    height: usize,
    frames: u64,
}

impl EyeTracker<StarburstStub> {
    pub fn new(config: &TrackerConfig) -> Result<Self, TrackerError> {
        Self::with_fitter(config, StarburstStub)
    }
}

impl<F: EllipseFitter> EyeTracker<F> {
    /// Build a tracker around an ellipse-fit collaborator. Fails when the
    /// frame size, kernel or initial parameters are unusable.
    pub fn with_fitter(config: &TrackerConfig, fitter: F) -> Result<Self, TrackerError> {
        if config.width < 2 || config.height < 2 {
            return Err(TrackerError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }
        let kernel = ContrastKernel::new(config.kernel)?;
        let (dw, dh) = half_dims(config.width, config.height);
        kernel.check_input(dw, dh)?;
        let params = ParamsHandle::new(config.params.clone())?;
        debug!(
            "EyeTracker::new frame={}x{} working={}x{} kernel={:?}",
            config.width, config.height, dw, dh, config.kernel
        );
        Ok(Self {
            kernel,
            params,
            fitter,
            width: config.width,
            height: config.height,
            frames: 0,
        })
    }

    /// Handle for publishing parameter updates from any thread.
    pub fn params_handle(&self) -> ParamsHandle {
        self.params.clone()
    }

    pub fn kernel(&self) -> &ContrastKernel {
        &self.kernel
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames
    }

    /// Run the full pipeline on one frame.
    ///
    /// Parameters are snapshotted once at entry; updates published while the
    /// frame runs take effect on the next call.
    pub fn process_frame(&mut self, frame: ImageU16<'_>) -> Result<FrameOutput, TrackerError> {
        let actual = (frame.width(), frame.height());
        if actual != (self.width, self.height) {
            return Err(TrackerError::FrameSizeMismatch {
                expected: (self.width, self.height),
                actual,
            });
        }
        let total_start = Instant::now();
        let snapshot = self.params.snapshot();
        let params = &*snapshot.params;
        let mut timing = TimingBreakdown::default();

        let downsampled = timing.time("downsample", || downsample2x2_mean_u16(&frame));
        let gradient = timing.time("contrast", || self.kernel.apply(&downsampled.as_view()))?;
        let detection = timing.time("detect", || {
            GlintDetector::new(params).detect(&gradient, &downsampled)
        })?;
        let windowed = timing.time("window", || {
            window_u16_to_u8(&frame, params.display.brightness_scale)
        });

        let mask_start = Instant::now();
        let projector = RegionProjector::new(&params.region);
        let masker = GlintMasker::new(&params.mask);
        let eyes: Vec<EyeImage> = detection
            .glints
            .iter()
            .enumerate()
            .filter_map(|(i, glint)| {
                let region = projector.project(glint.position, self.width, self.height);
                masker.prepare(i, &region, &detection.binarized, &windowed)
            })
            .collect();
        timing.push("mask_inpaint", elapsed_ms(mask_start));

        let fit_start = Instant::now();
        let eye_reports: Vec<EyeReport> = eyes
            .iter()
            .map(|eye| EyeReport {
                label: eye.label(),
                region: eye.region.full,
                small_region: eye.region.small,
                mask_pixels: eye.mask.data.iter().filter(|&&v| v == MASK_SET).count(),
                filled_pixels: eye.filled,
                ellipse: self.fitter.fit_ellipse(eye),
            })
            .collect();
        timing.push("fit", elapsed_ms(fit_start));
        timing.total_ms = elapsed_ms(total_start);

        self.frames += 1;
        debug!(
            "EyeTracker::process_frame #{} params_v{} glints={} eyes={} total_ms={:.3}",
            self.frames,
            snapshot.version,
            detection.glints.len(),
            eyes.len(),
            timing.total_ms
        );

        let report = FrameReport {
            input: InputDescriptor {
                width: self.width,
                height: self.height,
                downsampled_width: downsampled.w,
                downsampled_height: downsampled.h,
            },
            params_version: snapshot.version,
            candidates: detection.candidates,
            glints: detection.glints,
            eyes: eye_reports,
            timing,
        };
        Ok(FrameOutput {
            report,
            eyes,
            stages: FrameStages {
                downsampled,
                gradient,
                binarized: detection.binarized,
                windowed,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{EyeTracker, TrackerConfig};
    use crate::error::TrackerError;
    use crate::image::ImageU16;
    use crate::inpaint::EyeImage;
    use crate::types::Ellipse;
    use nalgebra::{Point2, Vector2};

    fn small_config() -> TrackerConfig {
        TrackerConfig {
            width: 64,
            height: 48,
            ..TrackerConfig::default()
        }
    }

    #[test]
    fn rejects_frame_of_wrong_size() {
        let mut tracker = EyeTracker::new(&small_config()).expect("tracker");
        let data = vec![0u16; 32 * 48];
        let frame = ImageU16::from_slice(32, 48, &data).expect("frame");
        let err = tracker.process_frame(frame).unwrap_err();
        assert!(matches!(err, TrackerError::FrameSizeMismatch { .. }));
        assert_eq!(tracker.frames_processed(), 0);
    }

    #[test]
    fn rejects_frames_too_short_for_kernel() {
        let config = TrackerConfig {
            width: 64,
            height: 16,
            ..TrackerConfig::default()
        };
        assert!(matches!(
            EyeTracker::new(&config),
            Err(TrackerError::FrameTooShort { .. })
        ));
    }

    #[test]
    fn blank_frame_has_no_glints() {
        let mut tracker = EyeTracker::new(&small_config()).expect("tracker");
        let data = vec![300u16; 64 * 48];
        let frame = ImageU16::from_slice(64, 48, &data).expect("frame");
        let out = tracker.process_frame(frame).expect("frame output");
        assert!(out.report.glints.is_empty());
        assert!(out.eyes.is_empty());
        assert_eq!(out.report.input.downsampled_width, 32);
        assert_eq!((out.stages.windowed.w, out.stages.windowed.h), (64, 48));
        assert!(out.report.timing.stage_ms("contrast").is_some());
    }

    #[test]
    fn custom_fitter_is_called_per_eye() {
        let mut config = small_config();
        config.width = 200;
        config.height = 100;
        config.params.separation_px = 30;
        config.params.refine_half_extent = 10;
        config.params.threshold.bias = -4;
        let fitter = |eye: &EyeImage| {
            let [cx, cy] = eye.region.full.center();
            Some(Ellipse {
                center: Point2::new(cx, cy),
                axes: Vector2::new(10.0, 8.0),
                angle_rad: 0.0,
            })
        };
        let mut tracker = EyeTracker::with_fitter(&config, fitter).expect("tracker");
        let mut data = vec![500u16; 200 * 100];
        for &cx in &[50usize, 150] {
            for y in 48..=52 {
                for x in cx - 2..=cx + 2 {
                    data[y * 200 + x] = 1023;
                }
            }
        }
        let frame = ImageU16::from_slice(200, 100, &data).expect("frame");
        let out = tracker.process_frame(frame).expect("frame output");
        assert_eq!(out.report.eyes.len(), out.eyes.len());
        assert!(out.report.eyes.iter().all(|e| e.ellipse.is_some()));
    }
}
