use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;
use std::thread;
use std::time::Instant;

use log::{debug, warn};

use crate::core::compute::compute_field::compute_field_into;
use crate::core::data::pixel_field::PixelField;
use crate::core::data::point::Point;
use crate::core::data::screen_geometry::ScreenGeometry;
use crate::core::data::selection_rect::SelectionRect;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::variant::{FractalKind, FractalVariant, julia_parameter_at};
use crate::core::selection::state_machine::{PointerSample, SelectionPoll, SelectionStateMachine};
use crate::core::transform::plane_transform::PlaneTransform;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExplorerError {
    ZeroMaxIterations,
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for ExplorerError {}

/// Picks a worker count from the machine's parallelism, capped by the row
/// count so no band can come out thinner than one row.
#[must_use]
pub fn suggested_worker_count(screen: ScreenGeometry) -> NonZeroUsize {
    let available = thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);

    NonZeroUsize::new(available.min(screen.height() as usize)).unwrap_or(NonZeroUsize::MIN)
}

/// The coordinator: owns the one mutable viewport and the startup-allocated
/// pixel field, and turns pointer input into zoom commits.
///
/// Everything here runs on the calling thread. A recompute blocks until its
/// fork-join finishes, so selection polling and field reads never overlap a
/// computation in flight, and the viewport is only ever replaced as a whole
/// value between recomputes.
#[derive(Debug)]
pub struct Explorer {
    screen: ScreenGeometry,
    kind: FractalKind,
    max_iterations: u32,
    workers: NonZeroUsize,
    viewport: Viewport,
    field: PixelField,
    selection: SelectionStateMachine,
    active_selection: Option<SelectionRect>,
}

impl Explorer {
    pub fn new(
        screen: ScreenGeometry,
        kind: FractalKind,
        max_iterations: u32,
    ) -> Result<Self, ExplorerError> {
        if max_iterations == 0 {
            return Err(ExplorerError::ZeroMaxIterations);
        }

        Ok(Self {
            screen,
            kind,
            max_iterations,
            workers: suggested_worker_count(screen),
            viewport: Viewport::default(),
            field: PixelField::new(screen),
            selection: SelectionStateMachine::new(),
            active_selection: None,
        })
    }

    #[must_use]
    pub fn with_worker_count(mut self, workers: NonZeroUsize) -> Self {
        self.workers = workers;
        self
    }

    #[must_use]
    pub fn screen(&self) -> ScreenGeometry {
        self.screen
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn field(&self) -> &PixelField {
        &self.field
    }

    /// The in-flight drag rectangle, for the overlay renderer.
    #[must_use]
    pub fn active_selection(&self) -> Option<SelectionRect> {
        self.active_selection
    }

    /// Recomputes the whole field for the current viewport, blocking until
    /// every worker has finished. The pointer is only consulted here, once,
    /// to snapshot the Julia seed for this recompute.
    pub fn recompute(&mut self, pointer: Point) {
        let variant = self.resolve_variant(pointer);
        let start = Instant::now();

        compute_field_into(
            &mut self.field,
            self.viewport,
            self.screen,
            variant,
            self.max_iterations,
            self.workers,
        );

        debug!(
            "recomputed {}x{} field in {:?} on {} workers",
            self.screen.width(),
            self.screen.height(),
            start.elapsed(),
            self.workers
        );
    }

    /// Feeds one pointer sample through the drag state machine.
    ///
    /// Returns the new viewport only on the release that commits a zoom;
    /// every other outcome (no drag, drag still in progress, discarded
    /// selection) returns `None` and leaves the current viewport in place.
    pub fn poll_selection(&mut self, sample: PointerSample) -> Option<Viewport> {
        match self.selection.poll(sample) {
            SelectionPoll::Idle => {
                self.active_selection = None;
                None
            }
            SelectionPoll::Dragging(rect) => {
                self.active_selection = Some(rect);
                None
            }
            SelectionPoll::Released(rect) => {
                self.active_selection = None;
                self.commit_selection(rect, sample.position)
            }
        }
    }

    /// Replaces the viewport with the home square and recomputes.
    /// Independent of any drag in progress.
    pub fn reset_viewport(&mut self, pointer: Point) -> Viewport {
        self.viewport = Viewport::default();
        self.recompute(pointer);
        self.viewport
    }

    fn commit_selection(&mut self, rect: SelectionRect, pointer: Point) -> Option<Viewport> {
        if rect.is_empty() {
            debug!("discarding zero-extent selection at {:?}", rect.top_left());
            return None;
        }

        let transform = PlaneTransform::new(self.screen, self.viewport);
        let top_left = rect.top_left();
        let bottom_right = rect.bottom_right();
        let origin = transform.to_plane(f64::from(top_left.x), f64::from(top_left.y));
        let corner = transform.to_plane(f64::from(bottom_right.x), f64::from(bottom_right.y));

        match Viewport::new(origin, corner) {
            Ok(viewport) => {
                self.viewport = viewport;
                self.recompute(pointer);
                Some(viewport)
            }
            Err(error) => {
                warn!("selection rejected, keeping current view: {}", error);
                None
            }
        }
    }

    fn resolve_variant(&self, pointer: Point) -> FractalVariant {
        match self.kind {
            FractalKind::Mandelbrot => FractalVariant::Mandelbrot,
            FractalKind::Julia => FractalVariant::Julia {
                parameter: julia_parameter_at(pointer, self.screen),
            },
        }
    }
}
