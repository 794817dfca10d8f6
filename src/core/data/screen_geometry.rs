use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScreenGeometryError {
    ZeroDimension { width: u32, height: u32 },
}

impl fmt::Display for ScreenGeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(
                    f,
                    "screen dimensions must be non-zero: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ScreenGeometryError {}

/// Pixel dimensions of the output field, fixed for the process lifetime.
///
/// Both dimensions are validated non-zero here, which is what makes the
/// pixel-to-plane transform total: a zero extent never reaches the divide.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScreenGeometry {
    width: u32,
    height: u32,
}

impl ScreenGeometry {
    pub fn new(width: u32, height: u32) -> Result<Self, ScreenGeometryError> {
        if width == 0 || height == 0 {
            return Err(ScreenGeometryError::ZeroDimension { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
