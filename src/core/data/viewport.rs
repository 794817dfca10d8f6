use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    DegenerateExtent { width: f64, height: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateExtent { width, height } => {
                write!(
                    f,
                    "viewport extents must be finite and non-zero: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangular region of the complex plane currently mapped onto the
/// screen, stored as the plane coordinates of two screen corners: `origin`
/// sits under pixel (0, 0) and `corner` under pixel (width, height).
///
/// Extents are signed, so a viewport may be flipped on either axis, but a
/// zero or non-finite extent is rejected at construction. Every value of
/// this type therefore yields a well-defined pixel-to-plane mapping.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    origin: Complex,
    corner: Complex,
}

impl Viewport {
    pub fn new(origin: Complex, corner: Complex) -> Result<Self, ViewportError> {
        let width = corner.real - origin.real;
        let height = corner.imag - origin.imag;

        if !width.is_finite() || !height.is_finite() || width == 0.0 || height == 0.0 {
            return Err(ViewportError::DegenerateExtent { width, height });
        }

        Ok(Self { origin, corner })
    }

    #[must_use]
    pub fn origin(&self) -> Complex {
        self.origin
    }

    #[must_use]
    pub fn corner(&self) -> Complex {
        self.corner
    }

    /// Signed extent along the real axis.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.corner.real - self.origin.real
    }

    /// Signed extent along the imaginary axis.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.corner.imag - self.origin.imag
    }
}

impl Default for Viewport {
    /// The home view: the square with corners (-2, -2) and (2, 2), which
    /// frames the whole Mandelbrot set with room to spare.
    fn default() -> Self {
        Self {
            origin: Complex {
                real: -2.0,
                imag: -2.0,
            },
            corner: Complex { real: 2.0, imag: 2.0 },
        }
    }
}
