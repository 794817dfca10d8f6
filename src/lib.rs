mod core;
mod explorer;
#[cfg(feature = "gui")]
mod input;

pub use crate::core::compute::compute_field::{compute_field, compute_field_into};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_field::PixelField;
pub use crate::core::data::point::Point;
pub use crate::core::data::screen_geometry::{ScreenGeometry, ScreenGeometryError};
pub use crate::core::data::selection_rect::SelectionRect;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::variant::{FractalKind, FractalVariant};
pub use crate::core::selection::state_machine::{
    PointerSample, SelectionPoll, SelectionStateMachine,
};
pub use crate::core::transform::plane_transform::PlaneTransform;
pub use crate::explorer::{Explorer, ExplorerError};

#[cfg(feature = "gui")]
pub use crate::input::gui::{WindowConfig, run_window};
