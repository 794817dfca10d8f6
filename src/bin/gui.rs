use fractal_zoom::{FractalKind, WindowConfig, run_window};

fn main() {
    env_logger::init();

    let mut config = WindowConfig::default();
    if let Some(choice) = std::env::args().nth(1) {
        config.fractal = match choice.as_str() {
            "mandelbrot" => FractalKind::Mandelbrot,
            "julia" => FractalKind::Julia,
            other => {
                eprintln!("unknown fractal '{}', expected 'mandelbrot' or 'julia'", other);
                std::process::exit(2);
            }
        };
    }

    if let Err(error) = run_window(config) {
        eprintln!("fractal explorer failed: {}", error);
        std::process::exit(1);
    }
}
