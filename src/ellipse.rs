//! Seam to the downstream pupil ellipse fitter.
use crate::inpaint::EyeImage;
use crate::types::Ellipse;

/// Fits a pupil ellipse to a prepared eye crop. Coordinates of the returned
/// ellipse are in full-resolution frame space.
pub trait EllipseFitter {
    fn fit_ellipse(&mut self, eye: &EyeImage) -> Option<Ellipse>;
}

/// Placeholder for the Starburst fitter; never produces an ellipse.
#[derive(Clone, Copy, Debug, Default)]
pub struct StarburstStub;

impl EllipseFitter for StarburstStub {
    fn fit_ellipse(&mut self, _eye: &EyeImage) -> Option<Ellipse> {
        None
    }
}

impl<F: FnMut(&EyeImage) -> Option<Ellipse>> EllipseFitter for F {
    fn fit_ellipse(&mut self, eye: &EyeImage) -> Option<Ellipse> {
        self(eye)
    }
}
