// Paint controller - Idle/Painting state machine applying one paint mode per gesture

use crate::grid::{EdgeGrid, EdgeRef};
use crate::paint::pointer::{HitTest, PointerAction, PointerEvent};
use log::debug;

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintState {
    Idle,
    Painting,
}

/// Ephemeral state of the gesture in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaintSession {
    pub active: bool,
    /// Value written to every edge crossed during the gesture
    pub mode: Option<bool>,
    pub last_visited: Option<EdgeRef>,
    /// Pointer that owns the gesture
    pub pointer_id: Option<u32>,
}

/// What a pointer event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintOutcome {
    /// Event had no effect on state
    Ignored,
    /// Gesture started on `edge`, which now holds `mode`
    Started { edge: EdgeRef, mode: bool },
    /// `edge` was written with the gesture's mode
    Painted(EdgeRef),
    /// Gesture finished; consumers should refresh their export
    Ended,
}

impl PaintOutcome {
    pub fn ended(&self) -> bool {
        matches!(self, PaintOutcome::Ended)
    }
}

/// Converts pointer input into edge writes on an EdgeGrid.
///
/// Only one gesture runs at a time. Events from any other pointer are
/// ignored until the owning pointer lifts or is cancelled.
#[derive(Debug, Default)]
pub struct PaintController {
    session: PaintSession,
}

impl PaintController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PaintState {
        if self.session.active {
            PaintState::Painting
        } else {
            PaintState::Idle
        }
    }

    pub fn is_painting(&self) -> bool {
        self.session.active
    }

    pub fn session(&self) -> &PaintSession {
        &self.session
    }

    /// Route one normalized pointer event, resolving its position with `hit`
    pub fn handle<H>(&mut self, grid: &mut EdgeGrid, hit: &H, event: PointerEvent) -> PaintOutcome
    where
        H: HitTest + ?Sized,
    {
        match event.action {
            PointerAction::Down => {
                let edge = hit.edge_at(event.position);
                self.begin(grid, edge, event.pointer_id)
            }
            PointerAction::Move => {
                if !self.owns(event.pointer_id) {
                    return PaintOutcome::Ignored;
                }
                let edge = hit.edge_at(event.position);
                self.visit(grid, edge, event.pointer_id)
            }
            PointerAction::Up | PointerAction::Cancel => self.end(event.pointer_id),
        }
    }

    /// Pointer-down on `edge`. Starts painting unless the edge is missing,
    /// locked, or a gesture is already running.
    pub fn begin(&mut self, grid: &mut EdgeGrid, edge: Option<EdgeRef>, pointer_id: u32) -> PaintOutcome {
        if self.session.active {
            return PaintOutcome::Ignored;
        }
        let edge = match edge {
            Some(edge) if grid.contains(edge) && !grid.is_locked(edge) => edge,
            _ => return PaintOutcome::Ignored,
        };

        let mode = !grid.is_on(edge);
        grid.set_on(edge, mode);
        self.session = PaintSession {
            active: true,
            mode: Some(mode),
            last_visited: Some(edge),
            pointer_id: Some(pointer_id),
        };
        debug!("Paint gesture started on {} (mode: {})", edge, if mode { "on" } else { "off" });
        PaintOutcome::Started { edge, mode }
    }

    /// Pointer passing over `edge` while painting
    pub fn visit(&mut self, grid: &mut EdgeGrid, edge: Option<EdgeRef>, pointer_id: u32) -> PaintOutcome {
        if !self.owns(pointer_id) {
            return PaintOutcome::Ignored;
        }
        let (edge, mode) = match (edge, self.session.mode) {
            (Some(edge), Some(mode)) => (edge, mode),
            _ => return PaintOutcome::Ignored,
        };
        if self.session.last_visited == Some(edge) || !grid.contains(edge) || grid.is_locked(edge) {
            return PaintOutcome::Ignored;
        }

        grid.set_on(edge, mode);
        self.session.last_visited = Some(edge);
        PaintOutcome::Painted(edge)
    }

    /// Pointer-up or cancellation; both end the gesture the same way
    pub fn end(&mut self, pointer_id: u32) -> PaintOutcome {
        // single gesture: an up or cancel from any other pointer leaves it running
        if !self.owns(pointer_id) {
            return PaintOutcome::Ignored;
        }
        self.session = PaintSession::default();
        debug!("Paint gesture ended");
        PaintOutcome::Ended
    }

    /// Drop any gesture in progress without reporting it (used on rebuild)
    pub fn reset(&mut self) {
        self.session = PaintSession::default();
    }

    fn owns(&self, pointer_id: u32) -> bool {
        self.session.active && self.session.pointer_id == Some(pointer_id)
    }
}
