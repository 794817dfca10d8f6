use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::screen_geometry::ScreenGeometry;
use crate::core::data::viewport::Viewport;
use crate::core::transform::plane_transform::PlaneTransform;

/// Which fractal family the explorer renders. Chosen once at startup.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
}

/// A fully resolved variant, ready for evaluation.
///
/// For Julia this carries the seed parameter snapshotted at dispatch time;
/// the evaluation itself never looks at live input, so every pixel of one
/// recompute sees the same seed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FractalVariant {
    Mandelbrot,
    Julia { parameter: Complex },
}

impl FractalVariant {
    #[must_use]
    pub fn kind(&self) -> FractalKind {
        match self {
            Self::Mandelbrot => FractalKind::Mandelbrot,
            Self::Julia { .. } => FractalKind::Julia,
        }
    }
}

/// Derives the Julia seed from a pointer position by mapping it through
/// the home viewport: each axis runs over [-2, 2] across the full screen,
/// whatever region is currently zoomed in on.
#[must_use]
pub fn julia_parameter_at(pointer: Point, screen: ScreenGeometry) -> Complex {
    PlaneTransform::new(screen, Viewport::default())
        .to_plane(f64::from(pointer.x), f64::from(pointer.y))
}
