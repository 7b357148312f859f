use crate::grid::{EdgeRef, Orientation};
use std::fmt;

/// Errors raised by the outer surfaces of the editor (checked lookups,
/// configuration files, export files, host commands). Edge mutations
/// themselves never fail.
#[derive(Debug)]
pub enum MazeError {
    /// Edge does not exist on the current grid
    InvalidEdge {
        orientation: Orientation,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Configuration file or value errors
    ConfigError(String),
    /// Serialization or export target errors
    ExportError(String),
    /// Malformed host command text
    CommandError(String),
    /// Underlying file system errors
    Io(std::io::Error),
}

impl MazeError {
    pub fn invalid_edge(edge: EdgeRef, rows: usize, cols: usize) -> Self {
        MazeError::InvalidEdge {
            orientation: edge.orientation,
            row: edge.row,
            col: edge.col,
            rows,
            cols,
        }
    }
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidEdge {
                orientation,
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Invalid {:?} edge ({}, {}) - grid size is {}x{}",
                    orientation, row, col, cols, rows
                )
            }
            MazeError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MazeError::ExportError(msg) => write!(f, "Export failed: {}", msg),
            MazeError::CommandError(msg) => write!(f, "Invalid command: {}", msg),
            MazeError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MazeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        MazeError::Io(err)
    }
}

impl From<serde_json::Error> for MazeError {
    fn from(err: serde_json::Error) -> Self {
        MazeError::ExportError(err.to_string())
    }
}

/// Result type alias for editor operations that can fail
pub type MazeResult<T> = Result<T, MazeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_edge_display() {
        let error = MazeError::invalid_edge(EdgeRef::vertical(5, 7), 2, 3);
        let display = format!("{}", error);
        assert!(display.contains("Invalid Vertical edge"));
        assert!(display.contains("(5, 7)"));
        assert!(display.contains("3x2"));
    }

    #[test]
    fn test_io_conversion_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: MazeError = io.into();
        assert!(matches!(error, MazeError::Io(_)));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_serde_conversion() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let error: MazeError = err.into();
        assert!(format!("{}", error).starts_with("Export failed"));
    }
}
