use crate::core::data::point::Point;
use crate::core::data::selection_rect::SelectionRect;

/// One reading of the pointer, taken by the coordinator each polling cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PointerSample {
    pub position: Point,
    pub pressed: bool,
}

/// What the state machine observed for one pointer sample.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelectionPoll {
    /// No drag in progress.
    Idle,
    /// A drag is in progress; the rectangle is re-normalized from the
    /// recorded origin and this sample's position.
    Dragging(SelectionRect),
    /// The button was released; this is the final rectangle of the drag.
    Released(SelectionRect),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum DragState {
    Idle,
    Dragging { origin: Point },
}

/// Tracks a drag gesture in pixel space.
///
/// Cycles Idle → Dragging on press and Dragging → Idle on release; the
/// origin is recorded once at the press and every later sample rebuilds
/// the rectangle against it. The machine never interprets the rectangle;
/// converting a released one into a viewport is the coordinator's job.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SelectionStateMachine {
    state: DragState,
}

impl Default for SelectionStateMachine {
    fn default() -> Self {
        Self {
            state: DragState::Idle,
        }
    }
}

impl SelectionStateMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn poll(&mut self, sample: PointerSample) -> SelectionPoll {
        match (self.state, sample.pressed) {
            (DragState::Idle, false) => SelectionPoll::Idle,
            (DragState::Idle, true) => {
                self.state = DragState::Dragging {
                    origin: sample.position,
                };
                SelectionPoll::Dragging(SelectionRect::from_drag(
                    sample.position,
                    sample.position,
                ))
            }
            (DragState::Dragging { origin }, true) => {
                SelectionPoll::Dragging(SelectionRect::from_drag(origin, sample.position))
            }
            (DragState::Dragging { origin }, false) => {
                self.state = DragState::Idle;
                SelectionPoll::Released(SelectionRect::from_drag(origin, sample.position))
            }
        }
    }
}
