//! Projection of glints from downsampled space to eye regions.
//!
//! The full-resolution box is centred at twice the glint coordinate; the
//! downsampled box has half the size and is centred at the glint itself. Each
//! box is intersected with its own image bounds independently, so either may
//! end up degenerate near a frame edge.
use crate::detector::params::RegionParams;
use crate::roi::PixelRect;
use crate::types::EyeRegion;
use nalgebra::Point2;

#[derive(Clone, Copy, Debug)]
pub struct RegionProjector {
    box_width: usize,
    box_height: usize,
}

impl RegionProjector {
    pub fn new(params: &RegionParams) -> Self {
        Self {
            box_width: params.box_width,
            box_height: params.box_height,
        }
    }

    /// Project `glint` (downsampled coordinates) into a frame of
    /// `frame_w × frame_h` full-resolution pixels.
    pub fn project(&self, glint: Point2<f32>, frame_w: usize, frame_h: usize) -> EyeRegion {
        let full = centered_rect(
            glint.x * 2.0,
            glint.y * 2.0,
            self.box_width,
            self.box_height,
            frame_w,
            frame_h,
        );
        let small = centered_rect(
            glint.x,
            glint.y,
            self.box_width / 2,
            self.box_height / 2,
            frame_w / 2,
            frame_h / 2,
        );
        EyeRegion { full, small }
    }
}

fn centered_rect(
    cx: f32,
    cy: f32,
    width: usize,
    height: usize,
    bound_w: usize,
    bound_h: usize,
) -> PixelRect {
    if !cx.is_finite() || !cy.is_finite() {
        return PixelRect::clipped(0, 0, 0, 0, bound_w, bound_h);
    }
    let x0 = cx.round() as i64 - (width / 2) as i64;
    let y0 = cy.round() as i64 - (height / 2) as i64;
    PixelRect::clipped(x0, y0, width as i64, height as i64, bound_w, bound_h)
}
