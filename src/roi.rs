//! Axis-aligned integer rectangles used for eye regions and sampling windows.

use serde::{Deserialize, Serialize};

/// Half-open pixel rectangle `[x, x + width) × [y, y + height)`.
///
/// A rectangle with zero width or height is degenerate; stages treat it as
/// "nothing to do" rather than as an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl PixelRect {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Intersect the signed rectangle `[x0, x0 + width) × [y0, y0 + height)`
    /// with `[0, bound_w) × [0, bound_h)`.
    ///
    /// An empty intersection returns a zero-area rectangle whose origin is
    /// clamped into the bounds.
    pub fn clipped(
        x0: i64,
        y0: i64,
        width: i64,
        height: i64,
        bound_w: usize,
        bound_h: usize,
    ) -> Self {
        let (bw, bh) = (bound_w as i64, bound_h as i64);
        let x_lo = x0.clamp(0, bw);
        let y_lo = y0.clamp(0, bh);
        let x_hi = x0.saturating_add(width.max(0)).clamp(0, bw);
        let y_hi = y0.saturating_add(height.max(0)).clamp(0, bh);
        Self {
            x: x_lo as usize,
            y: y_lo as usize,
            width: (x_hi - x_lo).max(0) as usize,
            height: (y_hi - y_lo).max(0) as usize,
        }
    }

    /// Intersect with `[0, bound_w) × [0, bound_h)`.
    pub fn clip_to(&self, bound_w: usize, bound_h: usize) -> Self {
        Self::clipped(
            self.x as i64,
            self.y as i64,
            self.width as i64,
            self.height as i64,
            bound_w,
            bound_h,
        )
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn x_end(&self) -> usize {
        self.x + self.width
    }

    #[inline]
    pub fn y_end(&self) -> usize {
        self.y + self.height
    }

    /// Geometric centre in continuous pixel coordinates.
    pub fn center(&self) -> [f32; 2] {
        [
            self.x as f32 + self.width as f32 * 0.5,
            self.y as f32 + self.height as f32 * 0.5,
        ]
    }
}
