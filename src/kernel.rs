//! Contrast-emphasis kernel turning a raw half-resolution frame into an 8-bit
//! image in which thin, bright glint spikes stand out.
//!
//! Each output pixel divides the input pixel by the pixel a fixed number of
//! rows above it:
//!
//! ```text
//! out(x, y) = clamp_u8( in(x, y) * gain / max(in(x, max(y - offset, 0)), 1) )
//! ```
//!
//! Smooth shading and vignetting cancel in the ratio, while a glint (much
//! brighter than the iris/sclera just above it) produces a large value. Rows
//! above the top repeat the first row. The denominator is floored at one.
//!
//! Rows are independent, so the kernel runs row-parallel with a zipped inner
//! loop the compiler can vectorize.
use crate::error::TrackerError;
use crate::image::{ImageU16, ImageView, Plane};
use crate::parallel::for_each_row;
use serde::{Deserialize, Serialize};

/// Construction parameters of the contrast kernel. Fixed for the lifetime of
/// an [`crate::EyeTracker`]; they are not part of the live-tunable set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelParams {
    /// Rows between a pixel and its reference pixel above.
    pub row_offset: usize,
    /// Multiplier applied before the division.
    pub gain: u32,
}

impl Default for KernelParams {
    fn default() -> Self {
        Self {
            row_offset: 8,
            gain: 10,
        }
    }
}

/// Largest accepted gain; `u16::MAX * MAX_GAIN` still fits in `u32`.
pub const MAX_GAIN: u32 = 1 << 16;

/// The one-time-built emphasis transform owned by the tracker.
#[derive(Clone, Debug)]
pub struct ContrastKernel {
    params: KernelParams,
}

impl ContrastKernel {
    pub fn new(params: KernelParams) -> Result<Self, TrackerError> {
        if params.row_offset == 0 {
            return Err(TrackerError::InvalidParams(
                "kernel row_offset must be at least 1".into(),
            ));
        }
        if params.gain == 0 || params.gain > MAX_GAIN {
            return Err(TrackerError::InvalidParams(format!(
                "kernel gain must be in 1..={MAX_GAIN}, got {}",
                params.gain
            )));
        }
        Ok(Self { params })
    }

    pub fn params(&self) -> KernelParams {
        self.params
    }

    /// Checks that an input of `w × h` can be processed: both sides must
    /// exceed the row offset.
    pub fn check_input(&self, w: usize, h: usize) -> Result<(), TrackerError> {
        if w <= self.params.row_offset || h == 0 {
            return Err(TrackerError::InvalidDimensions {
                width: w,
                height: h,
            });
        }
        if h <= self.params.row_offset {
            return Err(TrackerError::FrameTooShort {
                height: h,
                offset: self.params.row_offset,
            });
        }
        Ok(())
    }

    /// Apply the kernel, returning an image with the input's dimensions.
    pub fn apply(&self, src: &ImageU16<'_>) -> Result<Plane<u8>, TrackerError> {
        self.check_input(src.width(), src.height())?;
        let mut out = Plane::new(src.width(), src.height());
        self.apply_rows(src, &mut out);
        Ok(out)
    }

    fn apply_rows(&self, src: &ImageU16<'_>, out: &mut Plane<u8>) {
        let offset = self.params.row_offset;
        let gain = self.params.gain;
        let width = out.w;
        for_each_row(&mut out.data, width, |y, dst| {
            let cur = src.row(y);
            let up = src.row(y.saturating_sub(offset));
            for ((o, &c), &u) in dst.iter_mut().zip(cur).zip(up) {
                let ratio = (c as u32 * gain) / (u as u32).max(1);
                *o = ratio.min(255) as u8;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{ContrastKernel, KernelParams, MAX_GAIN};
    use crate::error::TrackerError;
    use crate::image::ImageU16;

    fn kernel() -> ContrastKernel {
        ContrastKernel::new(KernelParams::default()).expect("default kernel")
    }

    #[test]
    fn flat_input_maps_to_gain() {
        let data = vec![500u16; 16 * 12];
        let src = ImageU16::from_slice(16, 12, &data).expect("frame");
        let out = kernel().apply(&src).expect("kernel output");
        assert_eq!((out.w, out.h), (16, 12));
        assert!(out.data.iter().all(|&v| v == 10));
    }

    #[test]
    fn spike_is_emphasized_relative_to_row_above() {
        let (w, h) = (12usize, 24usize);
        let mut data = vec![100u16; w * h];
        data[12 * w + 1] = 1000;
        let src = ImageU16::from_slice(w, h, &data).expect("frame");
        let out = kernel().apply(&src).expect("kernel output");
        assert_eq!(out.data[12 * w + 1], 100);
        assert_eq!(out.data[12 * w + 2], 10);
        // Eight rows below the spike the reference pixel is the spike itself.
        assert_eq!(out.data[20 * w + 1], 1);
    }

    #[test]
    fn zero_reference_does_not_divide_by_zero() {
        let (w, h) = (10usize, 10usize);
        let mut data = vec![0u16; w * h];
        data[9 * w] = 700;
        let src = ImageU16::from_slice(w, h, &data).expect("frame");
        let out = kernel().apply(&src).expect("kernel output");
        assert_eq!(out.data[9 * w], 255);
        assert_eq!(out.data[0], 0);
    }

    #[test]
    fn top_rows_reference_first_row() {
        let (w, h) = (10usize, 10usize);
        let mut data = vec![0u16; w * h];
        for x in 0..w {
            data[x] = 50;
            data[3 * w + x] = 100;
        }
        let src = ImageU16::from_slice(w, h, &data).expect("frame");
        let out = kernel().apply(&src).expect("kernel output");
        assert_eq!(out.data[3 * w], 20);
    }

    #[test]
    fn output_is_deterministic() {
        let (w, h) = (33usize, 17usize);
        let data: Vec<u16> = (0..w * h).map(|i| ((i * 7919) % 1024) as u16).collect();
        let src = ImageU16::from_slice(w, h, &data).expect("frame");
        let k = kernel();
        let a = k.apply(&src).expect("first run");
        let b = k.apply(&src).expect("second run");
        assert_eq!(a, b);
    }

    #[test]
    fn short_frames_fail_fast() {
        let data = vec![1u16; 12 * 8];
        let src = ImageU16::from_slice(12, 8, &data).expect("frame");
        let err = kernel().apply(&src).unwrap_err();
        assert_eq!(err, TrackerError::FrameTooShort { height: 8, offset: 8 });
    }

    #[test]
    fn narrow_frames_fail_fast() {
        let data = vec![1u16; 8 * 20];
        let src = ImageU16::from_slice(8, 20, &data).expect("frame");
        let err = kernel().apply(&src).unwrap_err();
        assert_eq!(
            err,
            TrackerError::InvalidDimensions {
                width: 8,
                height: 20
            }
        );
    }

    #[test]
    fn oversized_gain_is_rejected() {
        let err = ContrastKernel::new(KernelParams {
            row_offset: 8,
            gain: MAX_GAIN + 1,
        })
        .unwrap_err();
        assert!(matches!(err, TrackerError::InvalidParams(_)));
        assert!(ContrastKernel::new(KernelParams {
            row_offset: 8,
            gain: MAX_GAIN,
        })
        .is_ok());
    }

    #[test]
    fn zero_offset_is_rejected() {
        let err = ContrastKernel::new(KernelParams {
            row_offset: 0,
            gain: 10,
        })
        .unwrap_err();
        assert!(matches!(err, TrackerError::InvalidParams(_)));
    }
}
