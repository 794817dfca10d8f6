use std::num::NonZeroUsize;
use std::ops::Range;

use crate::core::compute::partition_rows::partition_rows;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_field::PixelField;
use crate::core::data::screen_geometry::ScreenGeometry;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::escape_time;
use crate::core::fractals::palette::map_iterations;
use crate::core::fractals::variant::FractalVariant;
use crate::core::transform::plane_transform::PlaneTransform;

/// Allocates a field for the given screen and fills it. Convenience over
/// [`compute_field_into`] for callers that do not hold a reusable buffer.
#[must_use]
pub fn compute_field(
    viewport: Viewport,
    screen: ScreenGeometry,
    variant: FractalVariant,
    max_iterations: u32,
    workers: NonZeroUsize,
) -> PixelField {
    let mut field = PixelField::new(screen);
    compute_field_into(&mut field, viewport, screen, variant, max_iterations, workers);
    field
}

/// Recomputes every pixel of the field in place with a blocking fork-join.
///
/// The row range is partitioned into one contiguous band per worker and
/// each band is filled by its own task inside a `rayon::scope`. The scope
/// join is the publication point: the call returns only once every pixel
/// has been written, so a caller never observes a half-finished buffer.
/// Viewport, variant, and bound are `Copy` snapshots taken before the
/// spawn, and the band slices are disjoint, so the workers share nothing
/// mutable.
pub fn compute_field_into(
    field: &mut PixelField,
    viewport: Viewport,
    screen: ScreenGeometry,
    variant: FractalVariant,
    max_iterations: u32,
    workers: NonZeroUsize,
) {
    debug_assert!(max_iterations > 0, "iteration bound must be positive");
    debug_assert_eq!(field.width(), screen.width());
    debug_assert_eq!(field.height(), screen.height());

    let transform = PlaneTransform::new(screen, viewport);
    let row_stride = screen.width() as usize;
    let bands = partition_rows(screen.height(), workers);
    let slices = field.band_slices(&bands);

    rayon::scope(|scope| {
        for (band, slice) in bands.into_iter().zip(slices) {
            scope.spawn(move |_| {
                fill_band(slice, band, row_stride, transform, variant, max_iterations);
            });
        }
    });
}

fn fill_band(
    slice: &mut [Colour],
    band: Range<u32>,
    row_stride: usize,
    transform: PlaneTransform,
    variant: FractalVariant,
    max_iterations: u32,
) {
    let kind = variant.kind();

    for (row_offset, row) in slice.chunks_exact_mut(row_stride).enumerate() {
        let y = f64::from(band.start + row_offset as u32);

        for (x, pixel) in row.iter_mut().enumerate() {
            let point = transform.to_plane(x as f64, y);
            let iterations = escape_time(variant, point, max_iterations);
            *pixel = map_iterations(kind, iterations, max_iterations);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn serial_reference(
        viewport: Viewport,
        screen: ScreenGeometry,
        variant: FractalVariant,
        max_iterations: u32,
    ) -> Vec<Colour> {
        let transform = PlaneTransform::new(screen, viewport);
        let kind = variant.kind();
        let mut pixels = Vec::with_capacity(screen.pixel_count());

        for y in 0..screen.height() {
            for x in 0..screen.width() {
                let point = transform.to_plane(f64::from(x), f64::from(y));
                let iterations = escape_time(variant, point, max_iterations);
                pixels.push(map_iterations(kind, iterations, max_iterations));
            }
        }

        pixels
    }

    fn workers(count: usize) -> NonZeroUsize {
        NonZeroUsize::new(count).unwrap()
    }

    #[test]
    fn test_parallel_matches_serial_reference() {
        let screen = ScreenGeometry::new(64, 48).unwrap();
        let viewport = Viewport::default();
        let expected = serial_reference(viewport, screen, FractalVariant::Mandelbrot, 100);

        for worker_count in [1, 2, 3, 8] {
            let field = compute_field(
                viewport,
                screen,
                FractalVariant::Mandelbrot,
                100,
                workers(worker_count),
            );
            assert_eq!(field.pixels(), expected.as_slice());
        }
    }

    #[test]
    fn test_julia_field_matches_serial_reference() {
        let screen = ScreenGeometry::new(32, 32).unwrap();
        let viewport = Viewport::default();
        let variant = FractalVariant::Julia {
            parameter: Complex {
                real: -0.8,
                imag: 0.156,
            },
        };
        let expected = serial_reference(viewport, screen, variant, 80);

        let field = compute_field(viewport, screen, variant, 80, workers(4));

        assert_eq!(field.pixels(), expected.as_slice());
    }

    #[test]
    fn test_height_not_divisible_by_workers_covers_every_row() {
        let screen = ScreenGeometry::new(16, 37).unwrap();
        let viewport = Viewport::default();
        let expected = serial_reference(viewport, screen, FractalVariant::Mandelbrot, 50);

        let field = compute_field(viewport, screen, FractalVariant::Mandelbrot, 50, workers(5));

        assert_eq!(field.pixels(), expected.as_slice());
    }

    #[test]
    fn test_more_workers_than_rows() {
        let screen = ScreenGeometry::new(8, 3).unwrap();
        let viewport = Viewport::default();
        let expected = serial_reference(viewport, screen, FractalVariant::Mandelbrot, 40);

        let field = compute_field(viewport, screen, FractalVariant::Mandelbrot, 40, workers(9));

        assert_eq!(field.pixels(), expected.as_slice());
    }

    #[test]
    fn test_screen_centre_of_home_view_is_interior_black() {
        let screen = ScreenGeometry::new(120, 80).unwrap();
        let field = compute_field(
            Viewport::default(),
            screen,
            FractalVariant::Mandelbrot,
            200,
            workers(4),
        );

        assert_eq!(field.pixel(60, 40), Some(Colour::BLACK));
    }

    #[test]
    fn test_recompute_overwrites_in_place() {
        let screen = ScreenGeometry::new(24, 24).unwrap();
        let zoomed = Viewport::new(
            Complex {
                real: -1.5,
                imag: -1.0,
            },
            Complex {
                real: -0.5,
                imag: 0.0,
            },
        )
        .unwrap();

        let mut field = compute_field(
            Viewport::default(),
            screen,
            FractalVariant::Mandelbrot,
            60,
            workers(2),
        );
        let before: Vec<Colour> = field.pixels().to_vec();

        compute_field_into(
            &mut field,
            zoomed,
            screen,
            FractalVariant::Mandelbrot,
            60,
            workers(2),
        );

        assert_ne!(field.pixels(), before.as_slice());
        assert_eq!(
            field.pixels(),
            serial_reference(zoomed, screen, FractalVariant::Mandelbrot, 60).as_slice()
        );
    }
}
