use std::error::Error;

use log::{error, info};
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowBuilder};

use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::screen_geometry::ScreenGeometry;
use crate::core::data::selection_rect::SelectionRect;
use crate::core::fractals::variant::FractalKind;
use crate::core::selection::state_machine::PointerSample;
use crate::explorer::Explorer;

const OUTLINE_COLOUR: Colour = Colour::WHITE;

/// Startup parameters for the windowed explorer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub fractal: FractalKind,
    pub max_iterations: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            fractal: FractalKind::Mandelbrot,
            max_iterations: 1000,
        }
    }
}

/// Opens the window and drives the explorer until the window is closed.
///
/// Left-drag selects a region to zoom into, releasing the button commits
/// it, and releasing `R` restores the home view. The field is only
/// recomputed on those actions; redraws in between just re-blit the
/// existing buffer with the drag outline on top.
pub fn run_window(config: WindowConfig) -> Result<(), Box<dyn Error>> {
    let screen = ScreenGeometry::new(config.width, config.height)?;
    let mut explorer = Explorer::new(screen, config.fractal, config.max_iterations)?;

    let event_loop = EventLoop::new()?;
    // The pixels surface borrows the window; leaking the window keeps that
    // borrow 'static instead of threading a lifetime through the loop.
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Fractal Zoom")
            .with_inner_size(LogicalSize::new(
                f64::from(config.width),
                f64::from(config.height),
            ))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let surface_texture = SurfaceTexture::new(config.width, config.height, window);
    let mut pixels = Pixels::new(config.width, config.height, surface_texture)?;

    let mut pointer = Point { x: 0, y: 0 };
    let mut pressed = false;

    explorer.recompute(pointer);
    info!(
        "{}x{} field ready, entering event loop",
        config.width, config.height
    );

    event_loop.run(move |event, target| {
        target.set_control_flow(ControlFlow::Wait);

        let Event::WindowEvent { event, .. } = event else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => target.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                pointer = Point {
                    x: position.x as i32,
                    y: position.y as i32,
                };
                feed_pointer(&mut explorer, pointer, pressed, window);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                pressed = state == ElementState::Pressed;
                feed_pointer(&mut explorer, pointer, pressed, window);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::KeyR),
                        state: ElementState::Released,
                        ..
                    },
                ..
            } => {
                explorer.reset_viewport(pointer);
                window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                draw_frame(&explorer, pixels.frame_mut());
                if let Err(err) = pixels.render() {
                    error!("surface render failed: {}", err);
                    target.exit();
                }
            }
            _ => {}
        }
    })?;

    Ok(())
}

fn feed_pointer(explorer: &mut Explorer, pointer: Point, pressed: bool, window: &Window) {
    let had_overlay = explorer.active_selection().is_some();
    let committed = explorer.poll_selection(PointerSample {
        position: pointer,
        pressed,
    });

    // Redraw on a committed zoom, while the overlay is visible, and once
    // more after it disappears so the last outline does not linger.
    if committed.is_some() || had_overlay || explorer.active_selection().is_some() {
        window.request_redraw();
    }
}

/// Blits the RGB field into the RGBA frame and overlays the drag outline.
fn draw_frame(explorer: &Explorer, frame: &mut [u8]) {
    for (colour, rgba) in explorer
        .field()
        .pixels()
        .iter()
        .zip(frame.chunks_exact_mut(4))
    {
        rgba[0] = colour.r;
        rgba[1] = colour.g;
        rgba[2] = colour.b;
        rgba[3] = 255;
    }

    if let Some(rect) = explorer.active_selection() {
        draw_selection_outline(
            frame,
            explorer.screen().width(),
            explorer.screen().height(),
            rect,
        );
    }
}

fn draw_selection_outline(frame: &mut [u8], width: u32, height: u32, rect: SelectionRect) {
    let top_left = rect.top_left();
    let bottom_right = rect.bottom_right();

    for x in top_left.x..=bottom_right.x {
        put_outline_pixel(frame, width, height, x, top_left.y);
        put_outline_pixel(frame, width, height, x, bottom_right.y);
    }
    for y in top_left.y..=bottom_right.y {
        put_outline_pixel(frame, width, height, top_left.x, y);
        put_outline_pixel(frame, width, height, bottom_right.x, y);
    }
}

fn put_outline_pixel(frame: &mut [u8], width: u32, height: u32, x: i32, y: i32) {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return;
    }

    let index = (y as u32 * width + x as u32) as usize * 4;
    frame[index] = OUTLINE_COLOUR.r;
    frame[index + 1] = OUTLINE_COLOUR.g;
    frame[index + 2] = OUTLINE_COLOUR.b;
}
