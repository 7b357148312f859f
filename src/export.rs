// Export - canonical JSON snapshot of an edge grid
//
// The document is pretty-printed with two-space indentation, then every
// bracket run holding only digits, commas and whitespace is collapsed onto
// one line, e.g. `[1,0,1]`. Consumers rely on this layout byte-for-byte.

use crate::config::editor_config::{DEFAULT_EXPORT_FILE, EXPORT_CONTENT_TYPE};
use crate::grid::{EdgeGrid, Orientation};
use crate::maze_errors::{MazeError, MazeResult};
use log::info;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const EXPORT_FILE_NAME: &str = DEFAULT_EXPORT_FILE;
pub const EXPORT_MIME_TYPE: &str = EXPORT_CONTENT_TYPE;

static NUMERIC_ARRAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\s+([0-9,\s]+?)\s+\]").expect("numeric array pattern is valid")
});
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Field order here is the field order of the exported JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub rows: usize,
    pub cols: usize,
    /// (rows + 1) x cols, 1 = wall present
    pub horizontals: Vec<Vec<u8>>,
    /// rows x (cols + 1), 1 = wall present
    pub verticals: Vec<Vec<u8>>,
}

impl ExportDocument {
    pub fn from_grid(grid: &EdgeGrid) -> Self {
        let (rows, cols) = (grid.rows(), grid.cols());
        let mut horizontals = vec![vec![0u8; cols]; rows + 1];
        let mut verticals = vec![vec![0u8; cols + 1]; rows];

        grid.for_each_edge(|edge, on, locked| {
            let value = u8::from(on || locked);
            match edge.orientation {
                Orientation::Horizontal => horizontals[edge.row][edge.col] = value,
                Orientation::Vertical => verticals[edge.row][edge.col] = value,
            }
        });

        Self {
            rows,
            cols,
            horizontals,
            verticals,
        }
    }

    /// Render in the canonical layout
    pub fn to_text(&self) -> MazeResult<String> {
        let pretty = serde_json::to_string_pretty(self)?;
        Ok(compact_numeric_arrays(&pretty))
    }
}

/// Serialize a grid into the canonical export text
pub fn serialize(grid: &EdgeGrid) -> MazeResult<String> {
    ExportDocument::from_grid(grid).to_text()
}

/// Collapse whitespace inside bracket runs made only of digits, commas and
/// whitespace. Everything else is left untouched.
pub fn compact_numeric_arrays(pretty: &str) -> String {
    NUMERIC_ARRAY
        .replace_all(pretty, |caps: &Captures| {
            format!("[{}]", WHITESPACE.replace_all(&caps[1], ""))
        })
        .into_owned()
}

/// Record of one saved snapshot, for hosts that hand the file on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedExport {
    pub path: PathBuf,
    pub content_type: String,
    pub bytes: usize,
}

/// Write the exact export bytes to `path`, announced as `content_type`
pub fn write_export<P: AsRef<Path>>(
    text: &str,
    path: P,
    content_type: &str,
) -> MazeResult<SavedExport> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(MazeError::ExportError("empty export path".into()));
    }
    if content_type.trim().is_empty() {
        return Err(MazeError::ExportError("empty content type".into()));
    }
    std::fs::write(path, text.as_bytes())?;
    info!(
        "💾 Saved {} bytes ({}) to {}",
        text.len(),
        content_type,
        path.display()
    );
    Ok(SavedExport {
        path: path.to_path_buf(),
        content_type: content_type.to_string(),
        bytes: text.len(),
    })
}
