// Terminal rendering of an edge grid
// Lattice points are corners, walls are drawn between them

use crate::grid::{EdgeGrid, EdgeRef};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::Write;

const H_ON: &str = "───";
const H_OFF: &str = "   ";
const V_ON: &str = "│";
const V_OFF: &str = " ";
const CELL: &str = "   ";

/// Colors used for colored output
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub locked: Color,
    pub painted: Color,
    pub dot: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            locked: Color::DarkGrey,
            painted: Color::Yellow,
            dot: Color::Cyan,
        }
    }
}

// One glyph of the picture with its styling role
enum Glyph {
    Dot(&'static str),
    Wall { text: &'static str, locked: bool },
    Blank(&'static str),
}

fn corner(show_dots: bool) -> Glyph {
    if show_dots {
        Glyph::Dot("+")
    } else {
        Glyph::Blank(" ")
    }
}

fn wall(grid: &EdgeGrid, edge: EdgeRef, on: &'static str, off: &'static str) -> Glyph {
    if grid.is_on(edge) {
        Glyph::Wall {
            text: on,
            locked: grid.is_locked(edge),
        }
    } else {
        Glyph::Blank(off)
    }
}

// Lines of glyphs, top to bottom
fn layout(grid: &EdgeGrid, show_dots: bool) -> Vec<Vec<Glyph>> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut lines = Vec::with_capacity(rows * 2 + 1);

    for r in 0..=rows {
        let mut line = vec![corner(show_dots)];
        for c in 0..cols {
            line.push(wall(grid, EdgeRef::horizontal(r, c), H_ON, H_OFF));
            line.push(corner(show_dots));
        }
        lines.push(line);

        if r == rows {
            break;
        }
        let mut line = Vec::with_capacity(cols * 2 + 1);
        for c in 0..=cols {
            line.push(wall(grid, EdgeRef::vertical(r, c), V_ON, V_OFF));
            if c < cols {
                line.push(Glyph::Blank(CELL));
            }
        }
        lines.push(line);
    }
    lines
}

/// Plain-text picture of the grid, one line per lattice or cell row
pub fn render_ascii(grid: &EdgeGrid, show_dots: bool) -> String {
    let mut out = String::new();
    for line in layout(grid, show_dots) {
        for glyph in line {
            out.push_str(match glyph {
                Glyph::Dot(text) | Glyph::Blank(text) => text,
                Glyph::Wall { text, .. } => text,
            });
        }
        out.push('\n');
    }
    out
}

/// Colored picture: perimeter walls dimmed, painted walls highlighted
pub fn print_edge_grid<W: Write>(
    out: &mut W,
    grid: &EdgeGrid,
    show_dots: bool,
    palette: &Palette,
) -> std::io::Result<()> {
    for line in layout(grid, show_dots) {
        for glyph in line {
            match glyph {
                Glyph::Blank(text) => queue!(out, Print(text))?,
                Glyph::Dot(text) => {
                    queue!(out, SetForegroundColor(palette.dot), Print(text), ResetColor)?
                }
                Glyph::Wall { text, locked } => {
                    let color = if locked { palette.locked } else { palette.painted };
                    queue!(out, SetForegroundColor(color), Print(text), ResetColor)?
                }
            }
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

/// Print a header line with size and wall count
pub fn print_grid_header<W: Write>(out: &mut W, grid: &EdgeGrid) -> std::io::Result<()> {
    queue!(
        out,
        SetForegroundColor(Color::Cyan),
        Print(format!(
            "=== MAZE {}x{} ({} walls) ===\n",
            grid.cols(),
            grid.rows(),
            grid.on_count()
        )),
        ResetColor
    )?;
    out.flush()
}
