// Edge references - orientation plus lattice position of one unit segment

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a unit segment on the lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Single-letter tag used by the text protocol and renderers ("h" / "v")
    pub fn tag(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "h",
            Orientation::Vertical => "v",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "h" | "horizontal" => Some(Orientation::Horizontal),
            "v" | "vertical" => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// Identifies one edge of the grid.
///
/// Horizontal edges live at grid-row `0..=rows`, column `0..cols`.
/// Vertical edges live at grid-row `0..rows`, column `0..=cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeRef {
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
}

impl EdgeRef {
    pub fn new(orientation: Orientation, row: usize, col: usize) -> Self {
        Self {
            orientation,
            row,
            col,
        }
    }

    pub fn horizontal(row: usize, col: usize) -> Self {
        Self::new(Orientation::Horizontal, row, col)
    }

    pub fn vertical(row: usize, col: usize) -> Self {
        Self::new(Orientation::Vertical, row, col)
    }

    /// Whether this edge exists on a grid of `rows` x `cols` cells
    pub fn fits(&self, rows: usize, cols: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => self.row <= rows && self.col < cols,
            Orientation::Vertical => self.row < rows && self.col <= cols,
        }
    }

    /// Whether this edge lies on the outer boundary of a `rows` x `cols` grid
    pub fn is_perimeter(&self, rows: usize, cols: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => self.row == 0 || self.row == rows,
            Orientation::Vertical => self.col == 0 || self.col == cols,
        }
    }
}

impl fmt::Display for EdgeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.orientation.tag(), self.row, self.col)
    }
}
