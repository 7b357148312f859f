// Edge Maze: authoring core for rectangular wall/edge mazes
// Edge model, drag-to-paint state machine and canonical JSON export

// Modular structure
pub mod command;
pub mod config;
pub mod display;
pub mod export;
pub mod geometry;
pub mod grid;
pub mod paint;
pub mod session;

// Import our error handling module
pub mod maze_errors;
pub use maze_errors::{MazeError, MazeResult};

// Re-export main types for convenience
pub use command::{parse_script, CommandResult, EditorCommand};
pub use config::{parse_grid_size, EditorConfig, ExportConfig, GridInput, GridSpec};
pub use export::{
    serialize, write_export, ExportDocument, SavedExport, EXPORT_FILE_NAME, EXPORT_MIME_TYPE,
};
pub use geometry::{GridGeometry, SegmentHitTester};
pub use grid::{EdgeGrid, EdgeRef, EdgeState, Orientation};
pub use paint::{
    HitTest, PaintController, PaintOutcome, PaintSession, PaintState, Point, PointerAction,
    PointerEvent,
};
pub use session::EditorSession;
