use crate::core::data::complex::Complex;
use crate::core::fractals::variant::FractalVariant;

/// Squared magnitude past which an orbit is guaranteed to diverge.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts iterations of z ← z² + c until the orbit escapes or the bound
/// is hit. Mandelbrot seeds the orbit at zero with c taken from the pixel;
/// Julia seeds the orbit at the pixel with c fixed to the variant's
/// parameter.
///
/// Returns a count in `[0, max_iterations]`; `max_iterations` means the
/// orbit never escaped (an interior point). Pure and deterministic, so it
/// can run on any number of worker threads at once.
#[must_use]
pub fn escape_time(variant: FractalVariant, point: Complex, max_iterations: u32) -> u32 {
    let (mut z, c) = match variant {
        FractalVariant::Mandelbrot => (Complex::ZERO, point),
        FractalVariant::Julia { parameter } => (point, parameter),
    };

    let mut iterations = 0;
    while iterations < max_iterations && z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED {
        z = z * z + c;
        iterations += 1;
    }

    iterations
}
