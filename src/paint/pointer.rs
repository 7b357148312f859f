// Normalized pointer input and the hit-testing seam

use crate::grid::EdgeRef;

/// Pointer position in the presentation layer's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pointer action type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Move,
    Up,
    /// Capture lost or gesture aborted by the host
    Cancel,
}

/// Pointer event as forwarded by the host's single event dispatcher
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub pointer_id: u32,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(action: PointerAction, pointer_id: u32, position: Point) -> Self {
        Self {
            action,
            pointer_id,
            position,
        }
    }

    pub fn down(pointer_id: u32, x: f64, y: f64) -> Self {
        Self::new(PointerAction::Down, pointer_id, Point::new(x, y))
    }

    pub fn move_to(pointer_id: u32, x: f64, y: f64) -> Self {
        Self::new(PointerAction::Move, pointer_id, Point::new(x, y))
    }

    pub fn up(pointer_id: u32, x: f64, y: f64) -> Self {
        Self::new(PointerAction::Up, pointer_id, Point::new(x, y))
    }

    pub fn cancel(pointer_id: u32) -> Self {
        Self::new(PointerAction::Cancel, pointer_id, Point::default())
    }
}

/// Maps a pointer position to the edge under it, if any.
///
/// Implemented by the presentation layer; the paint controller never does
/// geometry itself.
pub trait HitTest {
    fn edge_at(&self, position: Point) -> Option<EdgeRef>;
}

impl<F> HitTest for F
where
    F: Fn(Point) -> Option<EdgeRef>,
{
    fn edge_at(&self, position: Point) -> Option<EdgeRef> {
        self(position)
    }
}
