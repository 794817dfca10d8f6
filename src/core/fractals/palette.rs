use crate::core::data::colour::Colour;
use crate::core::fractals::variant::FractalKind;

/// Maps an escape-time count onto the palette for the given fractal family.
///
/// The count is normalized to t = n / max ∈ [0, 1] and each channel is a
/// fixed polynomial in t and (1 − t), scaled into [0, 255]. Both palettes
/// vanish at t = 0 and t = 1, so instantly-escaping points and interior
/// points are black and the gradient meets its endpoints continuously.
/// Position never enters the mapping, only the count.
#[must_use]
pub fn map_iterations(kind: FractalKind, iterations: u32, max_iterations: u32) -> Colour {
    let t = f64::from(iterations) / f64::from(max_iterations);
    let u = 1.0 - t;

    let (r, g, b) = match kind {
        FractalKind::Mandelbrot => (
            9.0 * u * t * t * t,
            15.0 * u * u * t * t,
            8.5 * u * u * u * t,
        ),
        FractalKind::Julia => (
            3.0 * u * t * t * t,
            16.0 * u * u * t * t,
            4.0 * u * u * u * t,
        ),
    };

    Colour {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}

fn channel(weight: f64) -> u8 {
    (weight * 255.0).clamp(0.0, 255.0) as u8
}
