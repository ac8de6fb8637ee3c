//! Error type shared by the tracker entry points.
//!
//! Only configuration and programming errors surface here. Degenerate geometry
//! and missing detections are normal per-frame outcomes and are reported
//! through empty results instead.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// Width or height is zero.
    InvalidDimensions { width: usize, height: usize },
    /// Backing buffer is shorter than `stride * height`.
    SizeMismatch { expected: usize, actual: usize },
    /// The contrast kernel needs more rows than its row offset.
    FrameTooShort { height: usize, offset: usize },
    /// Frame dimensions differ from the ones the tracker was built for.
    FrameSizeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    /// A parameter set failed validation.
    InvalidParams(String),
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid image dimensions {width}x{height}")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::FrameTooShort { height, offset } => {
                write!(
                    f,
                    "frame height {height} must exceed the kernel row offset {offset}"
                )
            }
            Self::FrameSizeMismatch { expected, actual } => write!(
                f,
                "frame size mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            Self::InvalidParams(msg) => write!(f, "invalid parameters: {msg}"),
        }
    }
}

impl std::error::Error for TrackerError {}
