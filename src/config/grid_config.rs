// Grid sizing - parsing of raw grid input into an immutable GridSpec

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COLS: usize = 10;
pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_CELL_SIZE: f64 = 40.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 3.0;
/// Largest accepted column or row count; anything above is malformed
pub const MAX_DIMENSION: usize = 1000;

// `<int> x <int>`, also accepting the multiplication sign
static GRID_SIZE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*([0-9]+)\s*[x×]\s*([0-9]+)\s*$").expect("grid size pattern is valid")
});

/// Immutable dimensions and visual sizing of one grid.
///
/// Only obtainable through `new`, `with_size`, `Default` or
/// `GridInput::to_spec`, so dimensions are always in `1..=MAX_DIMENSION`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GridSpec {
    cols: usize,
    rows: usize,
    cell_size: f64,
    stroke_width: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            cell_size: DEFAULT_CELL_SIZE,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl GridSpec {
    /// Build a spec from already-typed values. Degenerate or non-positive
    /// values fall back to the defaults, same as malformed text input.
    pub fn new(cols: usize, rows: usize, cell_size: f64, stroke_width: f64) -> Self {
        let (cols, rows) = if valid_dimension(cols) && valid_dimension(rows) {
            (cols, rows)
        } else {
            (DEFAULT_COLS, DEFAULT_ROWS)
        };
        Self {
            cols,
            rows,
            cell_size: positive_or(cell_size, DEFAULT_CELL_SIZE),
            stroke_width: positive_or(stroke_width, DEFAULT_STROKE_WIDTH),
        }
    }

    /// Same as `new` with default cell size and stroke width
    pub fn with_size(cols: usize, rows: usize) -> Self {
        Self::new(cols, rows, DEFAULT_CELL_SIZE, DEFAULT_STROKE_WIDTH)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Total number of edges (horizontal plus vertical)
    pub fn edge_count(&self) -> usize {
        (self.rows + 1) * self.cols + self.rows * (self.cols + 1)
    }

    /// Pixel extent of the cell area as (width, height)
    pub fn extent(&self) -> (f64, f64) {
        (
            self.cols as f64 * self.cell_size,
            self.rows as f64 * self.cell_size,
        )
    }
}

/// Raw configuration values as the presentation layer collects them
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridInput {
    pub grid_size: String,
    pub cell_size: String,
    pub stroke_width: String,
    /// Rendering only; has no influence on the edge model or painting
    pub show_dots: bool,
}

impl Default for GridInput {
    fn default() -> Self {
        Self {
            grid_size: format!("{}x{}", DEFAULT_COLS, DEFAULT_ROWS),
            cell_size: DEFAULT_CELL_SIZE.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH.to_string(),
            show_dots: true,
        }
    }
}

impl GridInput {
    pub fn new(grid_size: &str, cell_size: &str, stroke_width: &str, show_dots: bool) -> Self {
        Self {
            grid_size: grid_size.to_string(),
            cell_size: cell_size.to_string(),
            stroke_width: stroke_width.to_string(),
            show_dots,
        }
    }

    /// Resolve the raw text into a GridSpec. Never fails.
    pub fn to_spec(&self) -> GridSpec {
        let (cols, rows) = parse_grid_size(&self.grid_size);
        GridSpec {
            cols,
            rows,
            cell_size: parse_positive_or(&self.cell_size, DEFAULT_CELL_SIZE),
            stroke_width: parse_positive_or(&self.stroke_width, DEFAULT_STROKE_WIDTH),
        }
    }
}

/// Parse `"<cols>x<rows>"` (case-insensitive, `×` accepted) into `(cols, rows)`.
///
/// Unmatched text, zero dimensions and dimensions above `MAX_DIMENSION` all
/// resolve to the default 10x10.
pub fn parse_grid_size(text: &str) -> (usize, usize) {
    let parsed = GRID_SIZE_PATTERN.captures(text).and_then(|caps| {
        let cols = caps[1].parse::<usize>().ok()?;
        let rows = caps[2].parse::<usize>().ok()?;
        (valid_dimension(cols) && valid_dimension(rows)).then_some((cols, rows))
    });

    match parsed {
        Some(size) => size,
        None => {
            debug!(
                "Grid size {:?} not understood, using {}x{}",
                text, DEFAULT_COLS, DEFAULT_ROWS
            );
            (DEFAULT_COLS, DEFAULT_ROWS)
        }
    }
}

/// Whether `text` has the `<cols>x<rows>` shape, regardless of the values
pub fn is_grid_size(text: &str) -> bool {
    GRID_SIZE_PATTERN.is_match(text)
}

/// Parse a positive number, falling back to `default` for anything else
pub fn parse_positive_or(text: &str, default: f64) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => {
            debug!("Size value {:?} not usable, using {}", text, default);
            default
        }
    }
}

fn valid_dimension(n: usize) -> bool {
    (1..=MAX_DIMENSION).contains(&n)
}

fn positive_or(value: f64, default: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        default
    }
}
