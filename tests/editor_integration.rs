//! Integration tests: build, paint and export through the public API
use edge_maze::{
    parse_grid_size, serialize, EdgeGrid, EdgeRef, EditorConfig, EditorSession, ExportConfig,
    ExportDocument, GridInput, GridSpec, PaintOutcome, PaintState, PointerEvent,
};

#[test]
fn test_grid_size_inputs() {
    assert_eq!(parse_grid_size("5x7"), (5, 7));
    assert_eq!(parse_grid_size("5 X 7"), (5, 7));
    assert_eq!(parse_grid_size("5×7"), (5, 7));
    assert_eq!(parse_grid_size("abc"), (10, 10));
}

#[test]
fn test_two_by_one_example() {
    let mut session = EditorSession::from_input(&GridInput::new("2x1", "40", "3", true));
    assert_eq!(session.spec().cols(), 2);
    assert_eq!(session.spec().rows(), 1);

    assert!(session.toggle(EdgeRef::vertical(0, 1)));
    let doc: ExportDocument = serde_json::from_str(&session.export().unwrap()).unwrap();
    assert_eq!(doc.rows, 1);
    assert_eq!(doc.cols, 2);
    assert_eq!(doc.horizontals, vec![vec![1, 1], vec![1, 1]]);
    assert_eq!(doc.verticals, vec![vec![1, 1, 1]]);
}

#[test]
fn test_export_field_order_and_layout() {
    let grid = EdgeGrid::new(GridSpec::with_size(3, 2));
    let text = serialize(&grid).unwrap();
    let rows_at = text.find("\"rows\"").unwrap();
    let cols_at = text.find("\"cols\"").unwrap();
    let h_at = text.find("\"horizontals\"").unwrap();
    let v_at = text.find("\"verticals\"").unwrap();
    assert!(rows_at < cols_at && cols_at < h_at && h_at < v_at);
    assert!(text.contains("    [1,0,0,1],\n"));
    assert!(text.starts_with("{\n  \"rows\": 2,\n"));
    assert!(text.ends_with("\n}"));
}

#[test]
fn test_drag_on_then_off_with_pixels() {
    // 5x5 grid with 40px cells; interior horizontal row 2 lies on y = 80
    let mut session = EditorSession::new(GridSpec::with_size(5, 5), false);
    let path: Vec<(f64, f64)> = vec![(20.0, 80.0), (60.0, 81.0), (100.0, 79.0), (140.0, 80.0)];
    let edges: Vec<EdgeRef> = (0..4).map(|c| EdgeRef::horizontal(2, c)).collect();

    let (x, y) = path[0];
    session.pointer_event(PointerEvent::down(1, x, y));
    for &(x, y) in &path[1..] {
        session.pointer_event(PointerEvent::move_to(1, x, y));
    }
    assert!(session.pointer_event(PointerEvent::up(1, x, y)).ended());
    assert!(edges.iter().all(|e| session.is_on(*e)));

    // second gesture starts on an "on" edge and erases the same four
    session.pointer_event(PointerEvent::down(1, 100.0, 80.0));
    for &(x, y) in &path {
        session.pointer_event(PointerEvent::move_to(1, x, y));
    }
    session.pointer_event(PointerEvent::cancel(1));
    assert!(edges.iter().all(|e| !session.is_on(*e)));
    assert_eq!(session.paint_state(), PaintState::Idle);
}

#[test]
fn test_gesture_on_border_never_starts() {
    let mut session = EditorSession::new(GridSpec::with_size(3, 3), true);
    let outcome = session.pointer_event(PointerEvent::down(1, 60.0, 0.0));
    assert_eq!(outcome, PaintOutcome::Ignored);
    assert_eq!(session.paint_state(), PaintState::Idle);
    assert_eq!(
        session.pointer_event(PointerEvent::up(1, 60.0, 0.0)),
        PaintOutcome::Ignored
    );
}

#[test]
fn test_saved_file_matches_export() {
    let mut session = EditorSession::new(GridSpec::with_size(4, 2), true);
    session.set_on(EdgeRef::horizontal(1, 2), true);
    let path = std::env::temp_dir().join(format!("edge_maze_export_{}.json", std::process::id()));

    let saved = session.save_export(&ExportConfig::default(), Some(&path)).unwrap();
    assert_eq!(saved.content_type, "application/json");
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, session.export().unwrap());
    assert_eq!(saved.bytes, text.len());
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_save_uses_configured_export_settings() {
    let session = EditorSession::new(GridSpec::with_size(2, 2), true);
    let path = std::env::temp_dir().join(format!("edge_maze_level_{}.json", std::process::id()));
    let settings = ExportConfig {
        file_name: path.to_string_lossy().into_owned(),
        content_type: "application/vnd.maze+json".into(),
    };

    let saved = session.save_export(&settings, None).unwrap();
    assert_eq!(saved.path, path);
    assert_eq!(saved.content_type, "application/vnd.maze+json");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), session.export().unwrap());
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_config_drives_session() {
    let mut config = EditorConfig::default();
    config.grid.grid_size = "6 x 4".into();
    config.grid.stroke_width = "-2".into();
    let session = EditorSession::from_input(&config.grid);
    assert_eq!((session.spec().cols(), session.spec().rows()), (6, 4));
    assert_eq!(session.spec().stroke_width(), 3.0);
    assert_eq!(config.export.file_name, edge_maze::EXPORT_FILE_NAME);
}
