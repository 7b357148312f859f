// Geometry - where each edge and dot sits on the drawing surface
// Hosts use this to lay out lines and to resolve pointer positions to edges

use crate::config::GridSpec;
use crate::grid::{EdgeRef, Orientation};
use crate::paint::{HitTest, Point};

/// Margin around the cell area on every side
pub const CANVAS_MARGIN: f64 = 10.0;
pub const DOT_RADIUS: f64 = 2.0;
/// Smallest pick distance, so thin strokes stay grabbable
pub const MIN_PICK_DISTANCE: f64 = 6.0;

/// A drawable edge: its reference plus segment endpoints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSegment {
    pub edge: EdgeRef,
    pub start: Point,
    pub end: Point,
}

impl EdgeSegment {
    /// Squared distance from `p` to the nearest point of this segment
    pub fn distance_sq(&self, p: Point) -> f64 {
        let (abx, aby) = (self.end.x - self.start.x, self.end.y - self.start.y);
        let ab2 = abx * abx + aby * aby;
        let t = if ab2 < 1e-9 {
            0.0
        } else {
            (((p.x - self.start.x) * abx + (p.y - self.start.y) * aby) / ab2).clamp(0.0, 1.0)
        };
        let qx = self.start.x + t * abx;
        let qy = self.start.y + t * aby;
        (p.x - qx) * (p.x - qx) + (p.y - qy) * (p.y - qy)
    }
}

/// Lattice geometry for one GridSpec
#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    spec: GridSpec,
    show_dots: bool,
}

impl GridGeometry {
    pub fn new(spec: GridSpec, show_dots: bool) -> Self {
        Self { spec, show_dots }
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Canvas size as (width, height), margins included
    pub fn canvas_size(&self) -> (f64, f64) {
        let (w, h) = self.spec.extent();
        (w + 2.0 * CANVAS_MARGIN, h + 2.0 * CANVAS_MARGIN)
    }

    /// View box as (min_x, min_y, width, height)
    pub fn view_box(&self) -> (f64, f64, f64, f64) {
        let (w, h) = self.canvas_size();
        (-CANVAS_MARGIN, -CANVAS_MARGIN, w, h)
    }

    pub fn segment(&self, edge: EdgeRef) -> EdgeSegment {
        let cell = self.spec.cell_size();
        let (x, y) = (edge.col as f64 * cell, edge.row as f64 * cell);
        let end = match edge.orientation {
            Orientation::Horizontal => Point::new(x + cell, y),
            Orientation::Vertical => Point::new(x, y + cell),
        };
        EdgeSegment {
            edge,
            start: Point::new(x, y),
            end,
        }
    }

    /// Every edge segment, horizontal row-major then vertical row-major
    pub fn segments(&self) -> Vec<EdgeSegment> {
        let (rows, cols) = (self.spec.rows(), self.spec.cols());
        let horizontal = (0..=rows).flat_map(|r| (0..cols).map(move |c| EdgeRef::horizontal(r, c)));
        let vertical = (0..rows).flat_map(|r| (0..=cols).map(move |c| EdgeRef::vertical(r, c)));
        horizontal
            .chain(vertical)
            .map(|edge| self.segment(edge))
            .collect()
    }

    /// Lattice points to draw as dots; empty when dots are hidden
    pub fn dots(&self) -> Vec<Point> {
        if !self.show_dots {
            return Vec::new();
        }
        let cell = self.spec.cell_size();
        (0..=self.spec.rows())
            .flat_map(|r| (0..=self.spec.cols()).map(move |c| Point::new(c as f64 * cell, r as f64 * cell)))
            .collect()
    }

    pub fn hit_tester(&self) -> SegmentHitTester {
        SegmentHitTester::new(self)
    }
}

/// Nearest-segment hit tester over a GridGeometry
#[derive(Debug, Clone)]
pub struct SegmentHitTester {
    segments: Vec<EdgeSegment>,
    cell_size: f64,
    max_distance: f64,
}

impl SegmentHitTester {
    pub fn new(geometry: &GridGeometry) -> Self {
        Self {
            segments: geometry.segments(),
            cell_size: geometry.spec.cell_size(),
            max_distance: geometry.spec.stroke_width().max(MIN_PICK_DISTANCE),
        }
    }

    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }
}

impl HitTest for SegmentHitTester {
    fn edge_at(&self, position: Point) -> Option<EdgeRef> {
        let limit = self.max_distance * self.max_distance;
        // skip the scan when far outside the lattice
        let reach = self.max_distance + self.cell_size;
        self.segments
            .iter()
            .filter(|s| {
                (position.x - s.start.x).abs() <= reach && (position.y - s.start.y).abs() <= reach
            })
            .map(|s| (s.edge, s.distance_sq(position)))
            .filter(|(_, d)| *d <= limit)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(edge, _)| edge)
    }
}
