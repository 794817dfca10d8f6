use crate::core::data::complex::Complex;
use crate::core::data::screen_geometry::ScreenGeometry;
use crate::core::data::viewport::Viewport;

/// Per-axis affine mapping between pixel space and plane space.
///
/// Scale and offset are derived once per viewport change; the per-pixel
/// forward map is then two multiplies and two adds. Both inputs carry
/// their own validity invariants (non-zero screen extents, non-zero finite
/// viewport extents), so construction cannot fail and the scales are never
/// zero. That is what makes [`PlaneTransform::to_pixel`] the exact
/// algebraic inverse of [`PlaneTransform::to_plane`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneTransform {
    scale_re: f64,
    scale_im: f64,
    origin_re: f64,
    origin_im: f64,
}

impl PlaneTransform {
    #[must_use]
    pub fn new(screen: ScreenGeometry, viewport: Viewport) -> Self {
        Self {
            scale_re: viewport.width() / f64::from(screen.width()),
            scale_im: viewport.height() / f64::from(screen.height()),
            origin_re: viewport.origin().real,
            origin_im: viewport.origin().imag,
        }
    }

    /// Forward map: pixel coordinates to the plane point under them.
    #[must_use]
    pub fn to_plane(&self, x: f64, y: f64) -> Complex {
        Complex {
            real: x * self.scale_re + self.origin_re,
            imag: y * self.scale_im + self.origin_im,
        }
    }

    /// Inverse map: a plane point back to fractional pixel coordinates.
    #[must_use]
    pub fn to_pixel(&self, point: Complex) -> (f64, f64) {
        (
            (point.real - self.origin_re) / self.scale_re,
            (point.imag - self.origin_im) / self.scale_im,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn reference_transform() -> PlaneTransform {
        PlaneTransform::new(
            ScreenGeometry::new(1200, 800).unwrap(),
            Viewport::default(),
        )
    }

    #[test]
    fn test_pixel_origin_maps_to_viewport_origin() {
        let point = reference_transform().to_plane(0.0, 0.0);

        assert_eq!(point, Complex { real: -2.0, imag: -2.0 });
    }

    #[test]
    fn test_far_pixel_corner_maps_to_viewport_corner() {
        let point = reference_transform().to_plane(1200.0, 800.0);

        assert_eq!(point, Complex { real: 2.0, imag: 2.0 });
    }

    #[test]
    fn test_screen_centre_maps_to_plane_origin() {
        let point = reference_transform().to_plane(600.0, 400.0);

        assert_eq!(point, Complex::ZERO);
    }

    #[test]
    fn test_flipped_viewport_reverses_axis_direction() {
        let viewport = Viewport::new(
            Complex { real: 2.0, imag: 2.0 },
            Complex {
                real: -2.0,
                imag: -2.0,
            },
        )
        .unwrap();
        let transform = PlaneTransform::new(ScreenGeometry::new(100, 100).unwrap(), viewport);

        assert_eq!(transform.to_plane(0.0, 0.0), Complex { real: 2.0, imag: 2.0 });
        assert_eq!(
            transform.to_plane(100.0, 100.0),
            Complex {
                real: -2.0,
                imag: -2.0
            }
        );
    }

    #[test]
    fn test_round_trip_recovers_pixel_coordinates() {
        let transform = reference_transform();

        for &(x, y) in &[
            (0.0, 0.0),
            (1.0, 1.0),
            (599.0, 401.0),
            (1199.0, 799.0),
            (1200.0, 800.0),
        ] {
            let (rx, ry) = transform.to_pixel(transform.to_plane(x, y));
            assert_approx_eq(rx, x);
            assert_approx_eq(ry, y);
        }
    }

    #[test]
    fn test_round_trip_on_zoomed_viewport() {
        let viewport = Viewport::new(
            Complex {
                real: -0.7443,
                imag: 0.1315,
            },
            Complex {
                real: -0.7387,
                imag: 0.1347,
            },
        )
        .unwrap();
        let transform = PlaneTransform::new(ScreenGeometry::new(640, 480).unwrap(), viewport);

        let (rx, ry) = transform.to_pixel(transform.to_plane(123.0, 456.0));
        assert_approx_eq(rx, 123.0);
        assert_approx_eq(ry, 456.0);
    }
}
