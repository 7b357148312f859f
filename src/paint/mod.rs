// Paint module - drag-to-paint interaction over the edge grid

pub mod controller;
pub mod pointer;

pub use controller::{PaintController, PaintOutcome, PaintSession, PaintState};
pub use pointer::{HitTest, Point, PointerAction, PointerEvent};
