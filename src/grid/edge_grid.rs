// Edge grid - on/off state and lock flags for every unit segment of one grid

use crate::config::GridSpec;
use crate::grid::edge::{EdgeRef, Orientation};
use crate::maze_errors::{MazeError, MazeResult};

/// Snapshot of a single edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeState {
    pub on: bool,
    pub locked: bool,
}

/// All mutable maze state for one GridSpec.
///
/// Perimeter edges are locked at construction and always read as on.
/// Every mutation of a locked or out-of-range edge is silently ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeGrid {
    spec: GridSpec,
    // (rows + 1) x cols
    horizontal: Vec<Vec<bool>>,
    // rows x (cols + 1)
    vertical: Vec<Vec<bool>>,
    locked_horizontal: Vec<Vec<bool>>,
    locked_vertical: Vec<Vec<bool>>,
}

impl EdgeGrid {
    /// Allocate a fresh grid: perimeter locked and on, everything else off
    pub fn new(spec: GridSpec) -> Self {
        let (rows, cols) = (spec.rows(), spec.cols());

        let locked_horizontal: Vec<Vec<bool>> = (0..=rows)
            .map(|r| vec![r == 0 || r == rows; cols])
            .collect();
        let locked_vertical: Vec<Vec<bool>> = (0..rows)
            .map(|_| (0..=cols).map(|c| c == 0 || c == cols).collect())
            .collect();

        Self {
            spec,
            horizontal: locked_horizontal.clone(),
            vertical: locked_vertical.clone(),
            locked_horizontal,
            locked_vertical,
        }
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn rows(&self) -> usize {
        self.spec.rows()
    }

    pub fn cols(&self) -> usize {
        self.spec.cols()
    }

    /// Whether the edge exists on this grid
    pub fn contains(&self, edge: EdgeRef) -> bool {
        edge.fits(self.spec.rows(), self.spec.cols())
    }

    pub fn is_locked(&self, edge: EdgeRef) -> bool {
        self.contains(edge) && self.locks(edge.orientation)[edge.row][edge.col]
    }

    /// Locked edges always read as on; unknown edges read as off
    pub fn is_on(&self, edge: EdgeRef) -> bool {
        if !self.contains(edge) {
            return false;
        }
        self.is_locked(edge) || self.values(edge.orientation)[edge.row][edge.col]
    }

    /// Set an edge on or off. No-op for locked or unknown edges.
    pub fn set_on(&mut self, edge: EdgeRef, on: bool) {
        if !self.contains(edge) || self.is_locked(edge) {
            return;
        }
        let values = match edge.orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        };
        values[edge.row][edge.col] = on;
    }

    /// Flip an edge and return its resulting value
    pub fn toggle(&mut self, edge: EdgeRef) -> bool {
        let next = !self.is_on(edge);
        self.set_on(edge, next);
        self.is_on(edge)
    }

    /// Checked lookup for callers that want to know about bad coordinates
    pub fn state(&self, edge: EdgeRef) -> MazeResult<EdgeState> {
        if !self.contains(edge) {
            return Err(MazeError::invalid_edge(
                edge,
                self.spec.rows(),
                self.spec.cols(),
            ));
        }
        Ok(EdgeState {
            on: self.is_on(edge),
            locked: self.is_locked(edge),
        })
    }

    /// Visit every edge as `(edge, on, locked)`: horizontal edges row-major,
    /// then vertical edges row-major.
    pub fn for_each_edge<F>(&self, mut visit: F)
    where
        F: FnMut(EdgeRef, bool, bool),
    {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let locks = self.locks(orientation);
            for (r, row) in self.values(orientation).iter().enumerate() {
                for (c, &value) in row.iter().enumerate() {
                    let locked = locks[r][c];
                    visit(EdgeRef::new(orientation, r, c), value || locked, locked);
                }
            }
        }
    }

    /// Turn every unlocked edge off
    pub fn clear_all(&mut self) {
        self.rewrite_unlocked(|_| false);
    }

    /// Flip every unlocked edge
    pub fn invert_all(&mut self) {
        self.rewrite_unlocked(|on| !on);
    }

    /// Number of edges currently reading as on, perimeter included
    pub fn on_count(&self) -> usize {
        let mut count = 0;
        self.for_each_edge(|_, on, _| {
            if on {
                count += 1;
            }
        });
        count
    }

    fn rewrite_unlocked<F>(&mut self, f: F)
    where
        F: Fn(bool) -> bool,
    {
        let pairs = [
            (&mut self.horizontal, &self.locked_horizontal),
            (&mut self.vertical, &self.locked_vertical),
        ];
        for (values, locks) in pairs {
            for (row, lock_row) in values.iter_mut().zip(locks.iter()) {
                for (value, &locked) in row.iter_mut().zip(lock_row.iter()) {
                    if !locked {
                        *value = f(*value);
                    }
                }
            }
        }
    }

    fn values(&self, orientation: Orientation) -> &Vec<Vec<bool>> {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    fn locks(&self, orientation: Orientation) -> &Vec<Vec<bool>> {
        match orientation {
            Orientation::Horizontal => &self.locked_horizontal,
            Orientation::Vertical => &self.locked_vertical,
        }
    }
}
