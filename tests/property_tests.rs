//! Property tests for the edge model and paint controller
use edge_maze::{EdgeGrid, EdgeRef, ExportDocument, GridSpec, Orientation, PaintController};
use proptest::prelude::*;

fn spec_strategy() -> impl Strategy<Value = GridSpec> {
    (1usize..12, 1usize..12).prop_map(|(cols, rows)| GridSpec::with_size(cols, rows))
}

// Edge references that may fall outside the grid
fn edge_strategy() -> impl Strategy<Value = EdgeRef> {
    (any::<bool>(), 0usize..14, 0usize..14).prop_map(|(h, row, col)| {
        let orientation = if h {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        EdgeRef::new(orientation, row, col)
    })
}

fn snapshot(grid: &EdgeGrid) -> Vec<(EdgeRef, bool, bool)> {
    let mut edges = Vec::new();
    grid.for_each_edge(|edge, on, locked| edges.push((edge, on, locked)));
    edges
}

proptest! {
    #[test]
    fn fresh_grid_has_only_perimeter_on(spec in spec_strategy()) {
        let grid = EdgeGrid::new(spec);
        for (edge, on, locked) in snapshot(&grid) {
            let perimeter = edge.is_perimeter(spec.rows(), spec.cols());
            prop_assert_eq!(locked, perimeter);
            prop_assert_eq!(on, perimeter);
        }
    }

    #[test]
    fn locked_edges_stay_on(spec in spec_strategy(), edges in prop::collection::vec(edge_strategy(), 0..40)) {
        let mut grid = EdgeGrid::new(spec);
        for edge in edges {
            grid.toggle(edge);
            grid.set_on(edge, false);
        }
        grid.invert_all();
        for (_, on, locked) in snapshot(&grid) {
            if locked {
                prop_assert!(on);
            }
        }
    }

    #[test]
    fn set_off_is_idempotent(spec in spec_strategy(), edge in edge_strategy()) {
        let mut once = EdgeGrid::new(spec);
        once.invert_all();
        let mut twice = once.clone();
        once.set_on(edge, false);
        twice.set_on(edge, false);
        twice.set_on(edge, false);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn invert_twice_restores(spec in spec_strategy(), edges in prop::collection::vec(edge_strategy(), 0..30)) {
        let mut grid = EdgeGrid::new(spec);
        for edge in edges {
            grid.toggle(edge);
        }
        let before = grid.clone();
        grid.invert_all();
        grid.invert_all();
        prop_assert_eq!(grid, before);
    }

    #[test]
    fn clear_leaves_exactly_locked_edges(spec in spec_strategy(), edges in prop::collection::vec(edge_strategy(), 0..30)) {
        let mut grid = EdgeGrid::new(spec);
        for edge in edges {
            grid.toggle(edge);
        }
        grid.clear_all();
        for (_, on, locked) in snapshot(&grid) {
            prop_assert_eq!(on, locked);
        }
    }

    #[test]
    fn gesture_writes_mode_to_every_unlocked_edge(spec in spec_strategy(), path in prop::collection::vec(edge_strategy(), 1..20)) {
        let mut grid = EdgeGrid::new(spec);
        let mut paint = PaintController::new();
        let first = path[0];
        paint.begin(&mut grid, Some(first), 1);

        if let Some(mode) = paint.session().mode {
            for edge in &path[1..] {
                paint.visit(&mut grid, Some(*edge), 1);
            }
            paint.end(1);
            for edge in &path {
                if grid.contains(*edge) && !grid.is_locked(*edge) {
                    prop_assert_eq!(grid.is_on(*edge), mode);
                }
            }
        } else {
            // refused: missing or locked start edge leaves the grid untouched
            prop_assert!(!grid.contains(first) || grid.is_locked(first));
            prop_assert_eq!(grid, EdgeGrid::new(spec));
        }
    }

    #[test]
    fn export_shape_matches_spec(spec in spec_strategy()) {
        let doc = ExportDocument::from_grid(&EdgeGrid::new(spec));
        prop_assert_eq!(doc.horizontals.len(), spec.rows() + 1);
        prop_assert!(doc.horizontals.iter().all(|row| row.len() == spec.cols()));
        prop_assert_eq!(doc.verticals.len(), spec.rows());
        prop_assert!(doc.verticals.iter().all(|row| row.len() == spec.cols() + 1));
    }
}
